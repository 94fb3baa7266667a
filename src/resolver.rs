// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cross-Reference Resolver
//!
//! Resolves link fields embedded in one resource (a chassis's computer
//! systems, a system's chassis) against an already-built collection. A link
//! missing from the collection is reported as an [`UnresolvedReference`]; it
//! never invalidates the links that did resolve.
//!
//! Resolution is pure and read-only over completed collections.

use serde::Serialize;
use std::fmt;

use crate::domain::{Chassis, ComputerSystem, RedfishResource, ResourceKind, UriPath};
use crate::reader::ResourceCollection;

/// A reference whose path is absent from the target collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    pub path: UriPath,
    /// Display name of the expected resource kind
    pub kind: &'static str,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no {} found at path {}", self.kind, self.path)
    }
}

/// Outcome of resolving a list of references
#[derive(Debug)]
pub struct Resolution<'a, T> {
    /// Resolved references, in input order
    pub resolved: Vec<(&'a UriPath, &'a T)>,
    /// Unresolved references, in input order
    pub unresolved: Vec<UnresolvedReference>,
}

impl<'a, T> Resolution<'a, T> {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn resources(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.resolved.iter().map(|(_, resource)| *resource)
    }
}

/// Look every reference up in `target`
pub fn resolve_references<'a, T: RedfishResource>(
    references: &'a [UriPath],
    target: &'a ResourceCollection<T>,
) -> Resolution<'a, T> {
    let mut resolved = Vec::with_capacity(references.len());
    let mut unresolved = Vec::new();

    for path in references {
        match target.get(path) {
            Some(resource) => resolved.push((path, resource)),
            None => unresolved.push(UnresolvedReference {
                path: path.clone(),
                kind: <T::Kind as ResourceKind>::DISPLAY_NAME,
            }),
        }
    }

    Resolution {
        resolved,
        unresolved,
    }
}

impl Chassis {
    /// Computer systems housed in this chassis
    pub fn resolve_computer_systems<'a>(
        &'a self,
        systems: &'a ResourceCollection<ComputerSystem>,
    ) -> Resolution<'a, ComputerSystem> {
        resolve_references(self.computer_systems(), systems)
    }

    /// Chassis nested inside this one
    pub fn resolve_contained_chassis<'a>(
        &'a self,
        chassis: &'a ResourceCollection<Chassis>,
    ) -> Resolution<'a, Chassis> {
        resolve_references(self.contains(), chassis)
    }
}

impl ComputerSystem {
    /// Chassis this system lives in
    pub fn resolve_chassis<'a>(
        &'a self,
        chassis: &'a ResourceCollection<Chassis>,
    ) -> Resolution<'a, Chassis> {
        resolve_references(self.chassis(), chassis)
    }
}
