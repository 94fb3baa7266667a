// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Root Locator
//!
//! Turns a logical service name ([`ServiceRootIdentifier`]) or a raw path into
//! an absolute URI for one Redfish service:
//!
//! ```text
//! http://example.com          + /redfish/v1/         (service root)
//! https://bmc:8443/proxy      + /redfish/v1/Systems  (Systems collection)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ConnectionContext;
use crate::domain::UriPath;
use crate::errors::LocatorError;

/// Top-level Redfish services reachable from the service root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceRootIdentifier {
    ServiceRoot,
    AccountService,
    CertificateService,
    Chassis,
    EventService,
    JsonSchemas,
    Managers,
    Registries,
    SessionService,
    Sessions,
    Systems,
    TaskService,
    TelemetryService,
    UpdateService,
}

impl ServiceRootIdentifier {
    pub const ALL: &'static [ServiceRootIdentifier] = &[
        Self::ServiceRoot,
        Self::AccountService,
        Self::CertificateService,
        Self::Chassis,
        Self::EventService,
        Self::JsonSchemas,
        Self::Managers,
        Self::Registries,
        Self::SessionService,
        Self::Sessions,
        Self::Systems,
        Self::TaskService,
        Self::TelemetryService,
        Self::UpdateService,
    ];

    /// Path below `/redfish/v1/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::ServiceRoot => "",
            Self::AccountService => "AccountService",
            Self::CertificateService => "CertificateService",
            Self::Chassis => "Chassis",
            Self::EventService => "EventService",
            Self::JsonSchemas => "JsonSchemas",
            Self::Managers => "Managers",
            Self::Registries => "Registries",
            Self::SessionService => "SessionService",
            Self::Sessions => "SessionService/Sessions",
            Self::Systems => "Systems",
            Self::TaskService => "TaskService",
            Self::TelemetryService => "TelemetryService",
            Self::UpdateService => "UpdateService",
        }
    }
}

impl fmt::Display for ServiceRootIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceRoot => write!(f, "ServiceRoot"),
            other => write!(f, "{}", other.path_segment()),
        }
    }
}

/// What to locate: a logical service or a raw path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorTarget {
    Service(ServiceRootIdentifier),
    Path(String),
}

impl From<ServiceRootIdentifier> for LocatorTarget {
    fn from(value: ServiceRootIdentifier) -> Self {
        Self::Service(value)
    }
}

impl From<&str> for LocatorTarget {
    fn from(value: &str) -> Self {
        Self::Path(value.to_string())
    }
}

impl From<String> for LocatorTarget {
    fn from(value: String) -> Self {
        Self::Path(value)
    }
}

impl From<&UriPath> for LocatorTarget {
    fn from(value: &UriPath) -> Self {
        Self::Path(value.as_str().to_string())
    }
}

/// Absolute URI produced by the locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedUri(String);

impl ResolvedUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form usable as a fetch target or collection key
    pub fn to_path(&self) -> Result<UriPath, LocatorError> {
        Ok(UriPath::new(&self.0)?)
    }
}

impl fmt::Display for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URI path mapping for a protocol version; only version 1 exists
fn version_root(version: u32) -> Result<&'static str, LocatorError> {
    match version {
        1 => Ok("/redfish/v1"),
        other => Err(LocatorError::InvalidProtocolVersion(other)),
    }
}

/// Locator bound to one connection context
#[derive(Debug, Clone)]
pub struct ServiceRootLocator {
    /// `scheme://host[:port][/prefix]`
    origin: String,
    /// `origin + /redfish/v1`
    root: String,
}

impl ServiceRootLocator {
    /// Fails with [`LocatorError::InvalidProtocolVersion`] for unknown versions
    pub fn new(context: &ConnectionContext) -> Result<Self, LocatorError> {
        let version_root = version_root(context.protocol_version)?;
        let prefix = match context.path_prefix.as_deref().map(|p| p.trim_matches('/')) {
            Some(prefix) if !prefix.is_empty() => format!("/{}", prefix),
            _ => String::new(),
        };
        let origin = format!("{}{}", context.authority_uri(), prefix);
        let root = format!("{}{}", origin, version_root);
        Ok(Self { origin, root })
    }

    pub fn resolve(&self, target: impl Into<LocatorTarget>) -> Result<ResolvedUri, LocatorError> {
        match target.into() {
            LocatorTarget::Service(ServiceRootIdentifier::ServiceRoot) => {
                Ok(ResolvedUri(format!("{}/", self.root)))
            }
            LocatorTarget::Service(service) => Ok(ResolvedUri(format!(
                "{}/{}",
                self.root,
                service.path_segment()
            ))),
            LocatorTarget::Path(raw) => {
                let path = UriPath::new(&raw)?;
                if path.is_absolute() {
                    Ok(ResolvedUri(path.into()))
                } else if path.as_str().starts_with('/') {
                    Ok(ResolvedUri(format!("{}{}", self.origin, path)))
                } else {
                    Ok(ResolvedUri(format!("{}/{}", self.root, path)))
                }
            }
        }
    }
}

/// Resolve `target` against `context` in one step
pub fn resolve(
    target: impl Into<LocatorTarget>,
    context: &ConnectionContext,
) -> Result<ResolvedUri, LocatorError> {
    ServiceRootLocator::new(context)?.resolve(target)
}
