use crate::error::{ApiError, ApiResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the public PetFriends deployment.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Default per-request timeout. The suite relies on the HTTP stack's timeout
/// rather than doing any retry or cancellation of its own.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Account credentials for the PetFriends service.
///
/// Both fields are opaque strings; the service alone decides whether they
/// are valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// Client configuration for the PetFriends service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetFriendsConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    /// Account credentials used by [`authenticate`](crate::PetFriends::authenticate).
    pub credentials: Credentials,
    /// Per-request timeout applied to the underlying HTTP client.
    pub request_timeout: Duration,
}

impl Default for PetFriendsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::new("", ""),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl PetFriendsConfig {
    /// Build a configuration for the given deployment and credentials,
    /// keeping the default timeout.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            credentials,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `PETFRIENDS_EMAIL` and `PETFRIENDS_PASSWORD` are required;
    /// `PETFRIENDS_BASE_URL` overrides the public deployment when set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationError`] when a required variable is
    /// missing or empty.
    pub fn from_env() -> ApiResult<Self> {
        let email = require_env("PETFRIENDS_EMAIL")?;
        let password = require_env("PETFRIENDS_PASSWORD")?;
        let base_url = std::env::var("PETFRIENDS_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        log_debug!(
            base_url = %base_url,
            email = %email,
            "PetFriends configuration loaded from environment"
        );

        Ok(Self {
            base_url: trim_trailing_slash(base_url),
            credentials: Credentials::new(email, password),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Validate the configuration is complete.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationError`] if the base URL or either
    /// credential field is empty.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::configuration_error("Base URL is required"));
        }
        if self.credentials.email.is_empty() {
            return Err(ApiError::configuration_error("Account email is required"));
        }
        if self.credentials.password.is_empty() {
            return Err(ApiError::configuration_error(
                "Account password is required",
            ));
        }
        Ok(())
    }
}

fn require_env(name: &str) -> ApiResult<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            ApiError::configuration_error(format!("{name} environment variable must be set"))
        })
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> PetFriendsConfig {
        PetFriendsConfig::new(
            "https://petfriends.example",
            Credentials::new("user@example.com", "secret"),
        )
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn empty_credentials_fail_validation() {
        let mut config = valid_config();
        config.credentials.email.clear();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.credentials.password.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_base_url_fails_validation() {
        let mut config = valid_config();
        config.base_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = PetFriendsConfig::new(
            "https://petfriends.example///",
            Credentials::new("a@b.c", "p"),
        );
        assert_eq!(config.base_url, "https://petfriends.example");
    }

    #[test]
    fn default_points_at_public_deployment() {
        let config = PetFriendsConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    // The from_env tests mutate process-global environment variables, so
    // they are serialized against each other.

    fn clear_env() {
        std::env::remove_var("PETFRIENDS_EMAIL");
        std::env::remove_var("PETFRIENDS_PASSWORD");
        std::env::remove_var("PETFRIENDS_BASE_URL");
    }

    #[test]
    #[serial_test::serial]
    fn from_env_requires_credentials() {
        clear_env();
        assert!(matches!(
            PetFriendsConfig::from_env(),
            Err(ApiError::ConfigurationError { .. })
        ));

        std::env::set_var("PETFRIENDS_EMAIL", "env@example.com");
        assert!(
            PetFriendsConfig::from_env().is_err(),
            "password must still be required"
        );
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn from_env_defaults_the_base_url() {
        clear_env();
        std::env::set_var("PETFRIENDS_EMAIL", "env@example.com");
        std::env::set_var("PETFRIENDS_PASSWORD", "env-secret");

        let config = PetFriendsConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.credentials.email, "env@example.com");
        assert_eq!(config.credentials.password, "env-secret");
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn from_env_honors_the_base_url_override() {
        clear_env();
        std::env::set_var("PETFRIENDS_EMAIL", "env@example.com");
        std::env::set_var("PETFRIENDS_PASSWORD", "env-secret");
        std::env::set_var("PETFRIENDS_BASE_URL", "https://petfriends.local/");

        let config = PetFriendsConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://petfriends.local");
        clear_env();
    }
}
