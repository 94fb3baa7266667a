// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory transport
//!
//! Serves canned responses keyed by resource path. Paths that were never
//! registered answer `404`, the way a real service would. Absolute URIs are
//! matched by their path component, so locator output finds the same entries
//! as relative member links.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::config::ConnectionContext;
use crate::domain::UriPath;
use crate::errors::TransportError;
use crate::reader::{Fetch, FetchResponse};

#[derive(Debug, Clone)]
enum Canned {
    Response(FetchResponse),
    Failure(TransportError),
}

/// Fetcher backed by a map of canned responses
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
    responses: HashMap<String, Canned>,
    delays: HashMap<String, Duration>,
    delay: Option<Duration>,
    requests: Mutex<Vec<UriPath>>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` as a `200` JSON response
    pub fn with_json(self, path: &str, body: serde_json::Value) -> Self {
        self.with_body(path, 200, body.to_string())
    }

    pub fn with_body(mut self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(
            key(path),
            Canned::Response(FetchResponse {
                status,
                body: body.into(),
            }),
        );
        self
    }

    /// Answer with `status` and an empty body
    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.with_body(path, status, Vec::new())
    }

    pub fn with_failure(mut self, path: &str, error: TransportError) -> Self {
        self.responses.insert(key(path), Canned::Failure(error));
        self
    }

    /// Delay every response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay responses for one path only
    pub fn with_path_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(key(path), delay);
        self
    }

    /// Every URI fetched so far, in request order
    pub fn requests(&self) -> Vec<UriPath> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Fetch for InMemoryFetcher {
    async fn fetch(
        &self,
        _context: &ConnectionContext,
        uri: &UriPath,
    ) -> Result<FetchResponse, TransportError> {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(uri.clone()),
            Err(poisoned) => poisoned.into_inner().push(uri.clone()),
        }

        let key = key(uri.as_str());
        if let Some(delay) = self.delays.get(&key).copied().or(self.delay) {
            tokio::time::sleep(delay).await;
        }

        match self.responses.get(&key) {
            Some(Canned::Response(response)) => Ok(response.clone()),
            Some(Canned::Failure(error)) => Err(error.clone()),
            None => Ok(FetchResponse {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}

/// Path component of `uri`, normalized
fn key(uri: &str) -> String {
    let normalized = UriPath::new(uri)
        .map(String::from)
        .unwrap_or_else(|_| uri.to_string());
    match normalized.split_once("://") {
        Some((_, rest)) => match rest.find('/') {
            Some(index) => rest[index..].to_string(),
            None => "/".to_string(),
        },
        None => normalized,
    }
}
