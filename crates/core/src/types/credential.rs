//! Store credential types.
//!
//! A [`StoreCredential`] names the company whose store is being accessed and
//! carries the API user that authenticates every request.

use secrecy::{ExposeSecret, SecretString};

/// Errors that can occur when building a [`StoreCredential`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The company identifier is empty.
    #[error("company cannot be empty")]
    EmptyCompany,
    /// The API username is empty.
    #[error("username cannot be empty")]
    EmptyUsername,
    /// The API password is empty.
    #[error("password cannot be empty")]
    EmptyPassword,
}

/// Credentials for a company-scoped store.
///
/// Immutable once constructed. The company identifier appears in every
/// request path; the username and password form the Basic authorization
/// header.
///
/// Implements `Debug` manually to redact the password.
///
/// ## Examples
///
/// ```
/// use fastspring_core::StoreCredential;
///
/// let credential = StoreCredential::new("acme", "api-user", "s3cret").unwrap();
/// assert_eq!(credential.company(), "acme");
///
/// assert!(StoreCredential::new("", "api-user", "s3cret").is_err());
/// ```
#[derive(Clone)]
pub struct StoreCredential {
    company: String,
    username: String,
    password: SecretString,
}

impl StoreCredential {
    /// Create a new credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the company, username or password is empty.
    pub fn new(
        company: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let company = company.into();
        let username = username.into();
        let password = password.into();

        if company.is_empty() {
            return Err(CredentialError::EmptyCompany);
        }
        if username.is_empty() {
            return Err(CredentialError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }

        Ok(Self {
            company,
            username,
            password: SecretString::from(password),
        })
    }

    /// The vendor-assigned company identifier.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// The API username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The API password.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    /// The `username:password` pair used for Basic authentication.
    #[must_use]
    pub fn basic_auth_pair(&self) -> SecretString {
        SecretString::from(format!(
            "{}:{}",
            self.username,
            self.password.expose_secret()
        ))
    }
}

impl std::fmt::Debug for StoreCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredential")
            .field("company", &self.company)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
