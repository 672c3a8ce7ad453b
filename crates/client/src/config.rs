//! Store client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FASTSPRING_COMPANY` - Company identifier from the store URL
//! - `FASTSPRING_USERNAME` - API user name
//! - `FASTSPRING_PASSWORD` - API user password
//!
//! ## Optional
//! - `FASTSPRING_API_URL` - API host (default: `https://api.fastspring.com`)

use fastspring_core::{CredentialError, StoreCredential};
use thiserror::Error;

/// Default API host.
pub const DEFAULT_API_URL: &str = "https://api.fastspring.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid credential: {0}")]
    Credential(#[from] CredentialError),
}

/// Store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Company credential used for every request
    pub credential: StoreCredential,
    /// API host without trailing slash
    pub api_url: String,
}

impl StoreConfig {
    /// Configuration for the production API host.
    #[must_use]
    pub fn new(credential: StoreCredential) -> Self {
        Self {
            credential,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at another API host.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL is not `http(s)://`.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let credential = StoreCredential::new(
            required("FASTSPRING_COMPANY")?,
            required("FASTSPRING_USERNAME")?,
            required("FASTSPRING_PASSWORD")?,
        )?;

        let config = Self::new(credential);
        match get("FASTSPRING_API_URL") {
            Some(api_url) => config.with_api_url(&api_url),
            None => Ok(config),
        }
    }

    /// Base URL of the company store, e.g. `https://api.fastspring.com/company/acme`.
    #[must_use]
    pub fn store_url(&self) -> String {
        format!("{}/company/{}", self.api_url, self.credential.company())
    }
}

fn normalize_api_url(api_url: &str) -> Result<String, ConfigError> {
    let trimmed = api_url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvVar(
            "FASTSPRING_API_URL".to_string(),
            format!("must start with http:// or https:// (got {api_url:?})"),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("FASTSPRING_COMPANY", "acme"),
            ("FASTSPRING_USERNAME", "api-user"),
            ("FASTSPRING_PASSWORD", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.credential.password().expose_secret(), "s3cret");
        assert_eq!(
            config.store_url(),
            "https://api.fastspring.com/company/acme"
        );
    }

    #[test]
    fn test_from_lookup_custom_api_url() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("FASTSPRING_COMPANY", "acme"),
            ("FASTSPRING_USERNAME", "api-user"),
            ("FASTSPRING_PASSWORD", "s3cret"),
            ("FASTSPRING_API_URL", "http://127.0.0.1:8080/"),
        ]))
        .unwrap();

        assert_eq!(config.store_url(), "http://127.0.0.1:8080/company/acme");
    }

    #[test]
    fn test_from_lookup_missing_var() {
        let err = StoreConfig::from_lookup(lookup(&[
            ("FASTSPRING_COMPANY", "acme"),
            ("FASTSPRING_PASSWORD", "s3cret"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "FASTSPRING_USERNAME"));
    }

    #[test]
    fn test_from_lookup_empty_company() {
        let err = StoreConfig::from_lookup(lookup(&[
            ("FASTSPRING_COMPANY", ""),
            ("FASTSPRING_USERNAME", "api-user"),
            ("FASTSPRING_PASSWORD", "s3cret"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Credential(CredentialError::EmptyCompany)
        ));
    }

    #[test]
    fn test_invalid_api_url() {
        let err = normalize_api_url("ftp://api.fastspring.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = StoreConfig::new(StoreCredential::new("acme", "user", "hunter2").unwrap());
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
