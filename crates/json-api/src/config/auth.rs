//! Auth Config

use clap::Args;
use customers_app::auth::StaticCredentials;

/// Basic authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Login required on `/customers` routes
    #[arg(long, env = "BASIC_AUTH_LOGIN", requires = "basic_auth_password")]
    pub basic_auth_login: Option<String>,

    /// Password required on `/customers` routes
    #[arg(
        long,
        env = "BASIC_AUTH_PASSWORD",
        hide_env_values = true,
        requires = "basic_auth_login"
    )]
    pub basic_auth_password: Option<String>,
}

impl AuthConfig {
    /// Configured credentials, or `None` when Basic auth is disabled.
    #[must_use]
    pub fn credentials(&self) -> Option<StaticCredentials> {
        match (&self.basic_auth_login, &self.basic_auth_password) {
            (Some(login), Some(password)) => Some(StaticCredentials::new(login, password)),
            _ => None,
        }
    }
}
