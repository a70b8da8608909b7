use crate::{
    guard::Locale,
    probau::{self, Environment, SessionConfig},
};
use anyhow::Result;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub environment: Environment,
    pub session_max_age_seconds: i64,
    pub default_locale: Locale,
}

impl Args {
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.environment)
            .with_max_age_seconds(self.session_max_age_seconds)
            .with_default_locale(self.default_locale)
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to bind or serve.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Server args: {:?}", args);

    let config = args.session_config();

    probau::new(args.port, config).await
}
