// Copyright (c) 2025 - Cowboy AI, Inc.
//! URI Path Value Object
//!
//! A [`UriPath`] is both a navigation target (the next thing to fetch) and a
//! lookup key (collection membership). Paths are normalized on construction so
//! that `/redfish/v1/Systems/1/` and `/redfish/v1//Systems/1` name the same
//! resource.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// URI path validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UriPathError {
    #[error("URI path is empty")]
    Empty,

    #[error("URI path contains whitespace or control character {0:?}")]
    InvalidCharacter(char),

    #[error("Absolute URI has no host: {0}")]
    MissingHost(String),
}

/// Validated, normalized relative or absolute URI
///
/// # Normalization
/// - Scheme and host of absolute URIs are lowercased
/// - Repeated slashes in the path collapse to one
/// - A trailing slash is removed, except for the root path `/`
/// - Fragments (`#/PowerControl/0`) are kept verbatim
///
/// # Examples
///
/// ```rust
/// use cim_redfish::domain::UriPath;
///
/// let a = UriPath::new("/redfish/v1/Chassis/1/").unwrap();
/// let b = UriPath::new("/redfish/v1//Chassis/1").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "/redfish/v1/Chassis/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UriPath(String);

impl UriPath {
    /// Create a new URI path with validation and normalization
    ///
    /// # Invariants
    /// - Non-empty
    /// - No whitespace or control characters
    /// - Absolute URIs carry a host
    pub fn new(uri: impl AsRef<str>) -> Result<Self, UriPathError> {
        let uri = uri.as_ref();

        if uri.is_empty() {
            return Err(UriPathError::Empty);
        }

        if let Some(ch) = uri.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(UriPathError::InvalidCharacter(ch));
        }

        let (path_and_rest, fragment) = match uri.split_once('#') {
            Some((head, fragment)) => (head, Some(fragment)),
            None => (uri, None),
        };

        let mut normalized = match split_scheme(path_and_rest) {
            Some((scheme, rest)) => {
                let (authority, path) = match rest.find('/') {
                    Some(index) => rest.split_at(index),
                    None => (rest, ""),
                };
                if authority.is_empty() {
                    return Err(UriPathError::MissingHost(uri.to_string()));
                }
                let path = normalize_path(path);
                let path = if path == "/" { "" } else { path.as_str() };
                format!(
                    "{}://{}{}",
                    scheme.to_ascii_lowercase(),
                    authority.to_ascii_lowercase(),
                    path
                )
            }
            None => normalize_path(path_and_rest),
        };

        if let Some(fragment) = fragment {
            normalized.push('#');
            normalized.push_str(fragment);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this carries a scheme and host
    pub fn is_absolute(&self) -> bool {
        split_scheme(&self.0).is_some()
    }

    /// Append a path segment
    pub fn join(&self, segment: &str) -> Result<Self, UriPathError> {
        Self::new(format!("{}/{}", self.0, segment.trim_start_matches('/')))
    }

    /// Last non-empty path segment, e.g. `1` for `/redfish/v1/Chassis/1`
    pub fn last_segment(&self) -> Option<&str> {
        let without_fragment = self.0.split('#').next().unwrap_or(&self.0);
        without_fragment.rsplit('/').find(|s| !s.is_empty())
    }
}

fn split_scheme(uri: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = uri.split_once("://")?;
    let lower = scheme.to_ascii_lowercase();
    if lower == "http" || lower == "https" {
        Some((scheme, rest))
    } else {
        None
    }
}

fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(ch);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

impl fmt::Display for UriPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UriPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UriPath {
    type Error = UriPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UriPath {
    type Error = UriPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UriPath> for String {
    fn from(value: UriPath) -> Self {
        value.0
    }
}
