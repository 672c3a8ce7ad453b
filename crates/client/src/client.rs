//! Store client core: request construction and response handling.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fastspring_core::StoreCredential;
use fastspring_core::xml::{self, XmlResource};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

/// Content type of every request.
const XML_CONTENT_TYPE: &str = "application/xml";

/// Client for a single company store.
///
/// Holds only the immutable credential and transport, so clones are cheap
/// and calls may run concurrently without coordination.
pub struct StoreClient<T = HttpTransport> {
    inner: Arc<StoreClientInner<T>>,
}

struct StoreClientInner<T> {
    transport: T,
    company: String,
    store_url: String,
    authorization: HeaderValue,
}

impl StoreClient<HttpTransport> {
    /// Create a client for the production API host.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(credential: StoreCredential) -> Result<Self, StoreError> {
        Self::from_config(&StoreConfig::new(credential))
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::with_transport(config, HttpTransport::new()?)
    }
}

impl<T: Transport> StoreClient<T> {
    /// Create a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidHeader` if the Authorization header
    /// cannot be built from the credential.
    pub fn with_transport(config: &StoreConfig, transport: T) -> Result<Self, StoreError> {
        let credential = &config.credential;
        let encoded = STANDARD.encode(credential.basic_auth_pair().expose_secret().as_bytes());
        let mut authorization = HeaderValue::try_from(format!("Basic {encoded}"))?;
        authorization.set_sensitive(true);

        Ok(Self {
            inner: Arc::new(StoreClientInner {
                transport,
                company: credential.company().to_string(),
                store_url: config.store_url(),
                authorization,
            }),
        })
    }

    /// The company this client is scoped to.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.inner.company
    }

    /// Build an authenticated request for a store-relative path.
    pub(crate) fn request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.inner.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));

        HttpRequest {
            method,
            url: format!("{}{path}", self.inner.store_url),
            headers,
            body: body.map(String::into_bytes),
        }
    }

    /// Send a request and return the raw response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, StoreError> {
        let request = self.request(method, path, body);
        let response = self.inner.transport.send(request).await?;
        debug!(status = response.status.as_u16(), "Store API responded");
        Ok(response)
    }

    /// Execute a request whose response body is a resource.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<R, StoreError> {
        let response = self.send(method, path, None).await?;

        if !response.status.is_success() {
            return Err(StoreError::api(response.status, response.body));
        }

        if response.body.trim().is_empty() {
            return Err(StoreError::MissingResponseBody);
        }

        Ok(xml::from_xml(&response.body)?)
    }

    /// Execute a state-changing request.
    ///
    /// Any 2xx status is success; other statuses map to domain errors.
    pub(crate) async fn submit(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(), StoreError> {
        let response = self.send(method, path, body).await?;

        if response.status.is_success() {
            return Ok(());
        }

        let err = StoreError::from_status(response.status, response.body);
        warn!(error = %err, "Store API rejected change");
        Err(err)
    }

    /// Serialize a resource as a request body.
    pub(crate) fn body<B: XmlResource + Serialize>(value: &B) -> Result<String, StoreError> {
        Ok(xml::to_xml(value)?)
    }
}

impl<T> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for StoreClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("company", &self.inner.company)
            .field("store_url", &self.inner.store_url)
            .field("authorization", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Reject empty required arguments before any request is built.
pub(crate) const fn require(name: &'static str, value: &str) -> Result<(), StoreError> {
    if value.is_empty() {
        return Err(StoreError::InvalidArgument { name });
    }
    Ok(())
}
