//! Recording transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use fastspring_core::StoreCredential;
use reqwest::StatusCode;

use crate::client::StoreClient;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Transport that records every request and replays queued responses.
#[derive(Clone, Default)]
pub struct SpyTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
}

impl SpyTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The single request sent so far.
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for SpyTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| StoreError::Transport("no response queued".to_string()))
    }
}

pub fn test_config() -> StoreConfig {
    StoreConfig::new(StoreCredential::new("acme", "api-user", "s3cret").unwrap())
}

pub fn client_with(spy: SpyTransport) -> StoreClient<SpyTransport> {
    StoreClient::with_transport(&test_config(), spy).unwrap()
}

/// A client with an empty spy, returned alongside for inspection.
pub fn test_client() -> (StoreClient<SpyTransport>, SpyTransport) {
    let spy = SpyTransport::new();
    (client_with(spy.clone()), spy)
}
