//! Login/password verification for Basic authentication.

use std::fmt;

use async_trait::async_trait;
use mockall::automock;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// A single login/password pair held in memory.
#[derive(Clone)]
pub struct StaticCredentials {
    login: String,
    password: Zeroizing<String>,
}

impl StaticCredentials {
    #[must_use]
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("login", &self.login)
            .field("password", &"**redacted**")
            .finish()
    }
}

#[async_trait]
impl CredentialsVerifier for StaticCredentials {
    async fn verify(&self, login: &str, password: &str) -> bool {
        // Both comparisons always run so timing does not reveal which one failed.
        let login_matches = constant_time_str_eq(&self.login, login);
        let password_matches = constant_time_str_eq(&self.password, password);

        login_matches & password_matches
    }
}

fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[automock]
#[async_trait]
pub trait CredentialsVerifier: Send + Sync {
    /// Returns `true` when the login/password pair is accepted.
    async fn verify(&self, login: &str, password: &str) -> bool;
}
