//! Configuration for the PetFriends service and the suite's test accounts.
//!
//! The original fixtures held credentials as process-wide constants; here
//! everything is an explicit struct handed to the client (or the test layer)
//! at construction. The `from_env` constructors are the ONLY code that reads
//! environment variables.

use crate::error::{ClientError, ClientResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Base URL of the public PetFriends instance the course material targets.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Connection settings for the PetFriends service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service root; endpoint paths like `api/key` are joined onto it.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at an arbitrary service instance
    /// (a mock server in the hermetic tests, usually).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load the configuration from the environment.
    ///
    /// `PETFRIENDS_BASE_URL` overrides the default public instance.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PETFRIENDS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        log_debug!(
            base_url = %base_url,
            "Loaded PetFriends connection settings from environment"
        );

        Self { base_url }
    }

    /// Validate the configuration is complete.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the base URL is empty.
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::configuration(
                "PetFriends base URL is required",
            ));
        }
        Ok(())
    }
}

/// An (email, password) pair for the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The two canonical credential pairs the suite exercises.
///
/// `valid` must authenticate against the target instance; `invalid` must
/// not. The valid pair is never committed to the repository; it comes from
/// the environment.
#[derive(Debug, Clone)]
pub struct TestAccounts {
    /// A registered account on the target instance.
    pub valid: Credentials,
    /// A pair the service is expected to reject with 403.
    pub invalid: Credentials,
}

impl TestAccounts {
    /// Load both credential pairs from the environment.
    ///
    /// `PETFRIENDS_EMAIL` and `PETFRIENDS_PASSWORD` are required for the
    /// valid pair. `PETFRIENDS_INVALID_EMAIL` / `PETFRIENDS_INVALID_PASSWORD`
    /// are optional and default to values no real account would carry.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if either required variable is
    /// missing, so a live run fails before the first request instead of
    /// half-way through the suite.
    pub fn from_env() -> ClientResult<Self> {
        let email = std::env::var("PETFRIENDS_EMAIL").map_err(|_| {
            ClientError::configuration("PETFRIENDS_EMAIL is required for live runs")
        })?;
        let password = std::env::var("PETFRIENDS_PASSWORD").map_err(|_| {
            ClientError::configuration("PETFRIENDS_PASSWORD is required for live runs")
        })?;

        let invalid_email = std::env::var("PETFRIENDS_INVALID_EMAIL")
            .unwrap_or_else(|_| "not-a-user@example.invalid".to_string());
        let invalid_password = std::env::var("PETFRIENDS_INVALID_PASSWORD")
            .unwrap_or_else(|_| "definitely-wrong-password".to_string());

        log_debug!(
            valid_email = %email,
            invalid_email = %invalid_email,
            "Loaded PetFriends test accounts from environment"
        );

        Ok(Self {
            valid: Credentials::new(email, password),
            invalid: Credentials::new(invalid_email, invalid_password),
        })
    }
}
