//! Integration tests for the FastSpring client.
//!
//! Every test starts a [`FakeStore`], a local axum server that records the
//! requests it receives and replays queued responses, and points a real
//! [`StoreClient`] (reqwest transport) at it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fastspring-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use fastspring_client::{ConfigError, StoreClient, StoreConfig, StoreCredential, StoreError};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Company every fake-store client is scoped to.
pub const COMPANY: &str = "acme";
/// API user of every fake-store client.
pub const USERNAME: &str = "api-user";
/// Password of every fake-store client.
pub const PASSWORD: &str = "s3cret";

/// Errors that can occur while starting a fake store.
#[derive(Debug, thiserror::Error)]
pub enum FakeStoreError {
    #[error("Failed to bind fake store: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A request as seen by the fake store.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    /// Raw (still percent-encoded) query string.
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

/// Local stand-in for the vendor API.
pub struct FakeStore {
    addr: SocketAddr,
    state: FakeState,
    server: JoinHandle<()>,
}

impl FakeStore {
    /// Bind to an ephemeral port and start serving.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot be bound.
    pub async fn start() -> Result<Self, FakeStoreError> {
        let state = FakeState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            // Stops when the store is dropped
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Queue a response for the next request.
    #[must_use]
    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.state
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back((status, body.to_string()));
        self
    }

    /// Base URL to use as the API host.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client for [`COMPANY`] that talks to this store.
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be configured.
    pub fn client(&self) -> Result<StoreClient, FakeStoreError> {
        let credential = StoreCredential::new(COMPANY, USERNAME, PASSWORD)
            .map_err(ConfigError::from)?;
        let config = StoreConfig::new(credential).with_api_url(&self.api_url())?;
        Ok(StoreClient::from_config(&config)?)
    }

    /// All requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The single request received so far, if exactly one arrived.
    #[must_use]
    pub fn only_request(&self) -> Option<RecordedRequest> {
        let mut requests = self.requests();
        if requests.len() == 1 { requests.pop() } else { None }
    }
}

impl Drop for FakeStore {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Record the request and answer with the next queued response.
async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: header(AUTHORIZATION),
            content_type: header(CONTENT_TYPE),
            body,
        });

    state
        .responses
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .pop_front()
        .unwrap_or((StatusCode::NOT_FOUND, "no response queued".to_string()))
}
