use anyhow::{anyhow, Result};
use clap::{builder::PossibleValuesParser, Arg, ArgMatches, Command};

use crate::{guard::Locale, probau::Environment};

pub const ARG_ENVIRONMENT: &str = "environment";
pub const ARG_SESSION_MAX_AGE: &str = "session-max-age-seconds";
pub const ARG_DEFAULT_LOCALE: &str = "default-locale";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ENVIRONMENT)
                .short('e')
                .long(ARG_ENVIRONMENT)
                .help("Deployment environment; production marks the session cookie Secure")
                .env("PROBAU_ENV")
                .default_value("development")
                .value_parser(PossibleValuesParser::new(["development", "production"])),
        )
        .arg(
            Arg::new(ARG_SESSION_MAX_AGE)
                .long(ARG_SESSION_MAX_AGE)
                .help("Session cookie Max-Age in seconds")
                .env("PROBAU_SESSION_MAX_AGE_SECONDS")
                .default_value("2592000")
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new(ARG_DEFAULT_LOCALE)
                .long(ARG_DEFAULT_LOCALE)
                .help("Locale used when a request does not name one")
                .env("PROBAU_DEFAULT_LOCALE")
                .default_value("de")
                .value_parser(PossibleValuesParser::new(
                    Locale::ALL.map(Locale::as_str),
                )),
        )
}

#[derive(Debug)]
pub struct Options {
    pub environment: Environment,
    pub max_age_seconds: i64,
    pub default_locale: Locale,
}

impl Options {
    /// Read the session options from parsed matches.
    ///
    /// # Errors
    /// Returns an error if a value is missing or not recognized.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let environment = matches
            .get_one::<String>(ARG_ENVIRONMENT)
            .and_then(|value| Environment::parse(value))
            .ok_or_else(|| anyhow!("missing or invalid argument: --{ARG_ENVIRONMENT}"))?;
        let max_age_seconds = matches
            .get_one::<i64>(ARG_SESSION_MAX_AGE)
            .copied()
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_SESSION_MAX_AGE}"))?;
        let default_locale = matches
            .get_one::<String>(ARG_DEFAULT_LOCALE)
            .and_then(|value| Locale::parse(value))
            .ok_or_else(|| anyhow!("missing or invalid argument: --{ARG_DEFAULT_LOCALE}"))?;

        Ok(Self {
            environment,
            max_age_seconds,
            default_locale,
        })
    }
}
