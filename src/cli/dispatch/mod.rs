//! Map parsed command-line arguments to an [`Action`].

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{self, session};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .context("missing required argument: --port")?;

    let session_opts = session::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        environment: session_opts.environment,
        session_max_age_seconds: session_opts.max_age_seconds,
        default_locale: session_opts.default_locale,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{guard::Locale, probau::Environment};

    #[test]
    fn server_action_from_args() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "probau",
            "--port",
            "9090",
            "--environment",
            "production",
            "--session-max-age-seconds",
            "600",
            "--default-locale",
            "en",
        ]);

        let Action::Server(args) = handler(&matches)?;
        assert_eq!(args.port, 9090);
        assert_eq!(args.environment, Environment::Production);
        assert_eq!(args.session_max_age_seconds, 600);
        assert_eq!(args.default_locale, Locale::En);
        Ok(())
    }

    #[test]
    fn server_action_defaults() -> Result<()> {
        temp_env::with_vars(
            [
                ("PROBAU_PORT", None::<&str>),
                ("PROBAU_ENV", None),
                ("PROBAU_SESSION_MAX_AGE_SECONDS", None),
                ("PROBAU_DEFAULT_LOCALE", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec!["probau"]);
                let Action::Server(args) = handler(&matches)?;
                assert_eq!(args.port, 8080);
                assert_eq!(args.environment, Environment::Development);
                assert_eq!(args.session_max_age_seconds, 2_592_000);
                assert_eq!(args.default_locale, Locale::De);
                Ok(())
            },
        )
    }
}
