// Copyright (c) 2025 - Cowboy AI, Inc.
//! Redfish resource-graph reader for the Composable Information Machine
//!
//! Walks the linked JSON resources of a Redfish management service, decodes
//! each one into a validated, immutable domain value, builds typed
//! collections with per-link failure isolation, and resolves cross-references
//! between collections.
//!
//! ```text
//! locator ──> CollectionReader ──(per link)──> ResourceReader ──> Fetch
//!                    │
//!                    ▼
//!              resolver (chassis → systems, system → chassis)
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod locator;
pub mod reader;
pub mod resolver;

// Re-export commonly used types
pub use config::{ConnectionContext, Credentials, Transport};
pub use errors::{
    CollectionError, CollectionResult, ConfigError, LocatorError, ReadFailure, ReadResult,
    TransportError, ValidationError,
};
pub use locator::{ServiceRootIdentifier, ServiceRootLocator};
pub use reader::{CollectionOutcome, CollectionReader, Fetch, ResourceCollection, ResourceReader};
pub use resolver::{resolve_references, Resolution, UnresolvedReference};
