// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Reader
//!
//! Reads one resource: fetch the body, deserialize it into the resource's wire
//! document, then validate it into the domain value.
//!
//! ```text
//! UriPath ──fetch──> bytes ──serde──> Document ──from_document──> Resource
//!            │                  │                    │
//!            ▼                  ▼                    ▼
//!    TransportFailure      ParseFailure       ValidationFailure
//! ```
//!
//! The transport is abstracted behind [`Fetch`]; the reader is otherwise pure
//! and holds no per-read state, so one reader can be shared across concurrent
//! reads.

pub mod collection;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::config::ConnectionContext;
use crate::domain::{CollectionDocument, KeywordRegistry, RedfishResource, ResourceKind, UriPath};
use crate::errors::{ReadFailure, ReadResult, TransportError};

pub use collection::{
    ChassisCollection, CollectionOutcome, CollectionReader, ComputerSystemCollection,
    FailureReporter, LinkFailure, ResourceCollection, TracingReporter,
};

/// Raw response returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam
///
/// `uri` is either absolute or a path relative to the context's authority;
/// implementations resolve it against `context`. A non-success status is
/// returned as a response, not as an error.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(
        &self,
        context: &ConnectionContext,
        uri: &UriPath,
    ) -> Result<FetchResponse, TransportError>;
}

/// Decodes single resources through a [`Fetch`] implementation
pub struct ResourceReader<F> {
    fetcher: Arc<F>,
    registry: Arc<KeywordRegistry>,
}

impl<F> Clone for ResourceReader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<F: Fetch> ResourceReader<F> {
    pub fn new(fetcher: F, registry: Arc<KeywordRegistry>) -> Self {
        Self::from_shared(Arc::new(fetcher), registry)
    }

    pub fn from_shared(fetcher: Arc<F>, registry: Arc<KeywordRegistry>) -> Self {
        Self { fetcher, registry }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    /// Read and decode the resource at `path`
    ///
    /// Never yields a partially valid resource: any failure is one of the
    /// three [`ReadFailure`] classes.
    pub async fn read_resource<R: RedfishResource>(
        &self,
        context: &ConnectionContext,
        path: &UriPath,
    ) -> ReadResult<R> {
        let document = self.read_document::<R::Document>(context, path).await?;
        let resource =
            R::from_document(path, document, &self.registry).map_err(|source| {
                ReadFailure::Validation {
                    uri: path.clone(),
                    source,
                }
            })?;
        debug!(
            "Decoded {} at {}",
            <R::Kind as ResourceKind>::DISPLAY_NAME,
            path
        );
        Ok(resource)
    }

    /// Read a Redfish collection resource and return its member links
    pub async fn read_member_links(
        &self,
        context: &ConnectionContext,
        path: &UriPath,
    ) -> ReadResult<Vec<UriPath>> {
        self.read_document::<CollectionDocument>(context, path)
            .await?
            .member_paths()
            .map_err(|source| ReadFailure::Validation {
                uri: path.clone(),
                source,
            })
    }

    async fn read_document<D: DeserializeOwned>(
        &self,
        context: &ConnectionContext,
        path: &UriPath,
    ) -> ReadResult<D> {
        let response = self
            .fetcher
            .fetch(context, path)
            .await
            .map_err(|source| ReadFailure::Transport {
                uri: path.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(ReadFailure::Transport {
                uri: path.clone(),
                source: TransportError::Status {
                    status: response.status,
                },
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| ReadFailure::Parse {
            uri: path.clone(),
            message: e.to_string(),
        })
    }
}
