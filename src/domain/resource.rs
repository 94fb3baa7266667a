// Copyright (c) 2025 - Cowboy AI, Inc.
//! Decoding contract between wire documents and domain resources

use serde::de::DeserializeOwned;

use super::keyword::KeywordRegistry;
use super::resource_id::ResourceKind;
use super::UriPath;
use crate::errors::ValidationError;

/// A Redfish resource that can be read from a single URI
///
/// Decoding happens in two steps: the body is deserialized into
/// [`Document`](RedfishResource::Document), a loose mirror of the JSON shape,
/// and [`from_document`](RedfishResource::from_document) then validates every
/// field into the immutable domain value. A partially valid resource is never
/// produced.
pub trait RedfishResource: Sized + Send + Sync + 'static {
    /// Kind marker (ID prefix and display name)
    type Kind: ResourceKind;

    /// Wire shape of the JSON body
    type Document: DeserializeOwned + Send;

    fn from_document(
        path: &UriPath,
        document: Self::Document,
        registry: &KeywordRegistry,
    ) -> Result<Self, ValidationError>;
}
