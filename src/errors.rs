// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for Redfish graph traversal
//!
//! Failures are classified at single-resource granularity:
//!
//! - [`ReadFailure::Transport`] - server unreachable or non-success status (retryable)
//! - [`ReadFailure::Parse`] - body is not the expected resource shape
//! - [`ReadFailure::Validation`] - decoded values break a domain invariant
//!
//! Collection reads never fail because of a single [`ReadFailure`]; those are
//! attached to the outcome. [`CollectionError`] is reserved for structural
//! precondition violations.

use std::time::Duration;
use thiserror::Error;

use crate::domain::{BoundedStringError, NumericReadingError, UriPath, UriPathError};

/// Transport-level failure reported by a [`Fetch`](crate::reader::Fetch) implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection could not be established or was reset
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Path could not be turned into a request URI
    #[error("Invalid request URI: {0}")]
    InvalidUri(String),
}

/// A decoded value violates a domain invariant
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Field '{field}' is invalid: {source}")]
    BoundedString {
        field: &'static str,
        #[source]
        source: BoundedStringError,
    },

    #[error("Field '{field}' is invalid: {source}")]
    NumericReading {
        field: &'static str,
        #[source]
        source: NumericReadingError,
    },

    #[error("Field '{field}' is not a valid URI path: {source}")]
    UriPath {
        field: &'static str,
        #[source]
        source: UriPathError,
    },

    /// Keyword not recognized for a field that has no "unknown" fallback
    #[error("Field '{field}' has unrecognized keyword '{keyword}'")]
    UnknownKeyword { field: &'static str, keyword: String },

    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),
}

/// Failure to read exactly one resource
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReadFailure {
    #[error("Transport failure reading {uri}: {source}")]
    Transport {
        uri: UriPath,
        #[source]
        source: TransportError,
    },

    #[error("Parse failure reading {uri}: {message}")]
    Parse { uri: UriPath, message: String },

    #[error("Validation failure reading {uri}: {source}")]
    Validation {
        uri: UriPath,
        #[source]
        source: ValidationError,
    },
}

impl ReadFailure {
    /// Only transport failures are worth retrying; retry policy is the caller's
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn uri(&self) -> &UriPath {
        match self {
            Self::Transport { uri, .. } | Self::Parse { uri, .. } | Self::Validation { uri, .. } => {
                uri
            }
        }
    }

    /// Short classification label for logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Parse { .. } => "parse",
            Self::Validation { .. } => "validation",
        }
    }
}

/// Service root locator failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// Protocol version has no known URI path mapping
    #[error("Unsupported Redfish protocol version: {0}")]
    InvalidProtocolVersion(u32),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] UriPathError),
}

/// Structural failure of a whole collection read
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
    #[error("Invalid connection context: {0}")]
    InvalidContext(String),

    /// The same path was submitted more than once
    #[error("Duplicate path in collection request: {0}")]
    DuplicatePath(UriPath),

    /// The member list itself could not be obtained
    #[error("Failed to read collection members: {0}")]
    Members(#[source] ReadFailure),

    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error("Collection read was cancelled")]
    Cancelled,

    #[error("Collection read timed out after {0:?}")]
    TimedOut(Duration),
}

/// Configuration loading failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Environment variable {variable} has invalid value '{value}'")]
    InvalidValue {
        variable: &'static str,
        value: String,
    },
}

/// Result type for single-resource reads
pub type ReadResult<T> = Result<T, ReadFailure>;

/// Result type for collection reads
pub type CollectionResult<T> = Result<T, CollectionError>;
