//! Login backend.
//!
//! The form hands the credentials to an [`Authenticator`] once they pass the
//! client-side checks. No real server is reached: [`SimulatedAuthenticator`]
//! waits for a fixed delay and accepts every attempt.
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Credentials {
    pub fn new(email: String, password: String, remember_me: bool) -> Self {
        Self {
            email,
            password,
            remember_me,
        }
    }
}

// The password must never reach the logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service answered and refused the credentials.
    #[error("Credentials rejected: {0}")]
    Rejected(String),
    /// The service could not be reached or did not answer.
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait Authenticator: fmt::Debug {
    async fn login(&self, credentials: Credentials) -> Result<(), AuthError>;
}

/// Stands in for a remote service: waits, logs the attempt and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_DELAY)
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        info!(
            "Login attempted with: {} (remember me: {})",
            credentials.email, credentials.remember_me
        );
        Ok(())
    }
}
