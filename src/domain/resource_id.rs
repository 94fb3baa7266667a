// Copyright (c) 2025 - Cowboy AI, Inc.
//! Process-Scoped Resource Identifiers
//!
//! Every decoded resource receives a [`ResourceId`] drawn from a monotonically
//! increasing sequence. IDs are only meaningful within the running process:
//! they are not stable across restarts and must not be persisted. Use the
//! resource's [`UriPath`](super::UriPath) when a durable key is needed.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Marker for the kind of resource an ID names
pub trait ResourceKind: 'static {
    /// Short prefix shown in the rendered ID, e.g. `Cha`
    const PREFIX: &'static str;
    /// Human-readable kind, e.g. `chassis`
    const DISPLAY_NAME: &'static str;
}

/// Opaque sequence-based identifier
///
/// Equality, hashing and ordering use the sequence number only.
pub struct ResourceId<K: ResourceKind> {
    sequence: u64,
    kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> ResourceId<K> {
    /// Allocate the next identifier
    pub fn next() -> Self {
        Self {
            sequence: NEXT_SEQUENCE.fetch_add(1, AtomicOrdering::Relaxed),
            kind: PhantomData,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn prefix(&self) -> &'static str {
        K::PREFIX
    }
}

impl<K: ResourceKind> Clone for ResourceId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ResourceKind> Copy for ResourceId<K> {}

impl<K: ResourceKind> PartialEq for ResourceId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl<K: ResourceKind> Eq for ResourceId<K> {}

impl<K: ResourceKind> PartialOrd for ResourceId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: ResourceKind> Ord for ResourceId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl<K: ResourceKind> Hash for ResourceId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state);
    }
}

impl<K: ResourceKind> fmt::Debug for ResourceId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({}-{})", K::PREFIX, self.sequence)
    }
}

impl<K: ResourceKind> fmt::Display for ResourceId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", K::PREFIX, self.sequence)
    }
}

impl<K: ResourceKind> Serialize for ResourceId<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kind markers
pub mod kind {
    use super::ResourceKind;

    pub enum ServiceRoot {}
    pub enum Chassis {}
    pub enum ComputerSystem {}
    pub enum Power {}
    pub enum Sensor {}

    impl ResourceKind for ServiceRoot {
        const PREFIX: &'static str = "Svc";
        const DISPLAY_NAME: &'static str = "service root";
    }

    impl ResourceKind for Chassis {
        const PREFIX: &'static str = "Cha";
        const DISPLAY_NAME: &'static str = "chassis";
    }

    impl ResourceKind for ComputerSystem {
        const PREFIX: &'static str = "Sys";
        const DISPLAY_NAME: &'static str = "computer system";
    }

    impl ResourceKind for Power {
        const PREFIX: &'static str = "Pwr";
        const DISPLAY_NAME: &'static str = "power subsystem";
    }

    impl ResourceKind for Sensor {
        const PREFIX: &'static str = "Sen";
        const DISPLAY_NAME: &'static str = "sensor";
    }
}
