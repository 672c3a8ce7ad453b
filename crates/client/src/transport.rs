//! HTTP transport seam.
//!
//! The store client builds fully-formed [`HttpRequest`]s and hands them to a
//! [`Transport`]. [`HttpTransport`] is the production implementation on top
//! of `reqwest`; tests substitute a recording transport.

use std::future::Future;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::error::StoreError;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: HeaderMap,
    /// UTF-8 encoded body.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Body as text, if present and valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    /// Response body text; empty when the vendor sent none.
    pub body: String,
}

impl HttpResponse {
    /// Create a response.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one request and returns the complete response.
///
/// Implementations must read the whole body before returning so that no
/// connection state outlives the call.
pub trait Transport: Send + Sync {
    /// Perform a single HTTP exchange.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, StoreError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new() -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fastspring-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
