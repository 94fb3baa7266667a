// Copyright (c) 2025 - Cowboy AI, Inc.
//! Collection Reader
//!
//! Fans a set of links out to the [`ResourceReader`], at most
//! `max_concurrency` reads in flight, and joins once every link has either
//! decoded or failed.
//!
//! # Failure isolation
//!
//! A link that cannot be read is recorded as a [`LinkFailure`] and handed to
//! the [`FailureReporter`]; the rest of the collection is unaffected. Given N
//! links of which M fail, the outcome holds exactly N - M resources and M
//! failures.
//!
//! Only structural problems fail the whole read with a [`CollectionError`]:
//! an unusable context, a duplicated input path, an unobtainable member list,
//! cancellation, or the traversal timeout. A cancelled or timed-out read never
//! returns a partial collection.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use std::collections::{BTreeMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::{Fetch, ResourceReader};
use crate::config::ConnectionContext;
use crate::domain::{Chassis, ComputerSystem, RedfishResource, ResourceKind, UriPath};
use crate::errors::{CollectionError, CollectionResult, ReadFailure};
use crate::locator::{LocatorTarget, ServiceRootLocator};

/// Successfully decoded resources keyed by the path they were read from
#[derive(Debug, Clone)]
pub struct ResourceCollection<R> {
    members: BTreeMap<UriPath, R>,
}

pub type ChassisCollection = ResourceCollection<Chassis>;
pub type ComputerSystemCollection = ResourceCollection<ComputerSystem>;

impl<R> ResourceCollection<R> {
    pub fn contains(&self, path: &UriPath) -> bool {
        self.members.contains_key(path)
    }

    pub fn get(&self, path: &UriPath) -> Option<&R> {
        self.members.get(path)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in path order
    pub fn iter(&self) -> impl Iterator<Item = (&UriPath, &R)> {
        self.members.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &UriPath> {
        self.members.keys()
    }

    pub fn resources(&self) -> impl Iterator<Item = &R> {
        self.members.values()
    }
}

impl<R> Default for ResourceCollection<R> {
    fn default() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }
}

impl<R> FromIterator<(UriPath, R)> for ResourceCollection<R> {
    fn from_iter<I: IntoIterator<Item = (UriPath, R)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> IntoIterator for &'a ResourceCollection<R> {
    type Item = (&'a UriPath, &'a R);
    type IntoIter = std::collections::btree_map::Iter<'a, UriPath, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// One link that could not be read
#[derive(Debug, Clone, PartialEq)]
pub struct LinkFailure {
    pub traversal_id: Uuid,
    pub path: UriPath,
    pub failure: ReadFailure,
    pub occurred_at: DateTime<Utc>,
}

/// Receives every per-link failure of a collection read
pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &LinkFailure);
}

/// Default reporter: one `warn` event per failed link
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, failure: &LinkFailure) {
        warn!(
            traversal_id = %failure.traversal_id,
            path = %failure.path,
            kind = failure.failure.kind(),
            retryable = failure.failure.is_retryable(),
            "Failed to read collection member: {}",
            failure.failure
        );
    }
}

/// Result of a completed collection read
#[derive(Debug, Clone)]
pub struct CollectionOutcome<R> {
    traversal_id: Uuid,
    collection: ResourceCollection<R>,
    failures: Vec<LinkFailure>,
}

impl<R> CollectionOutcome<R> {
    /// Correlation ID shared by every log event of this read
    pub fn traversal_id(&self) -> Uuid {
        self.traversal_id
    }

    pub fn collection(&self) -> &ResourceCollection<R> {
        &self.collection
    }

    /// Failures in path order
    pub fn failures(&self) -> &[LinkFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_collection(self) -> ResourceCollection<R> {
        self.collection
    }

    pub fn into_parts(self) -> (ResourceCollection<R>, Vec<LinkFailure>) {
        (self.collection, self.failures)
    }
}

/// Builds typed collections from sets of links
pub struct CollectionReader<F> {
    reader: ResourceReader<F>,
    reporter: Arc<dyn FailureReporter>,
}

impl<F> Clone for CollectionReader<F> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
            reporter: Arc::clone(&self.reporter),
        }
    }
}

impl<F: Fetch> CollectionReader<F> {
    /// Reader that reports failures through [`TracingReporter`]
    pub fn new(reader: ResourceReader<F>) -> Self {
        Self::with_reporter(reader, Arc::new(TracingReporter))
    }

    pub fn with_reporter(reader: ResourceReader<F>, reporter: Arc<dyn FailureReporter>) -> Self {
        Self { reader, reporter }
    }

    pub fn resource_reader(&self) -> &ResourceReader<F> {
        &self.reader
    }

    /// Read every path in `paths` into one collection
    pub async fn read_collection<R: RedfishResource>(
        &self,
        context: &ConnectionContext,
        paths: impl IntoIterator<Item = UriPath>,
    ) -> CollectionResult<CollectionOutcome<R>> {
        self.read_collection_with_cancel(context, paths, std::future::pending())
            .await
    }

    /// Like [`read_collection`](Self::read_collection), aborting when `cancel`
    /// completes
    ///
    /// In-flight reads are dropped and already-decoded resources discarded.
    pub async fn read_collection_with_cancel<R, C>(
        &self,
        context: &ConnectionContext,
        paths: impl IntoIterator<Item = UriPath>,
        cancel: C,
    ) -> CollectionResult<CollectionOutcome<R>>
    where
        R: RedfishResource,
        C: Future<Output = ()>,
    {
        context.validate().map_err(CollectionError::InvalidContext)?;
        let paths = unique_paths(paths)?;

        let traversal_id = Uuid::now_v7();
        let span = info_span!(
            "read_collection",
            %traversal_id,
            kind = <R::Kind as ResourceKind>::DISPLAY_NAME,
            links = paths.len()
        );

        let traversal = async {
            let fan_out = self.fan_out::<R>(context, paths, traversal_id);
            match context.traversal_timeout() {
                Some(limit) => tokio::time::timeout(limit, fan_out)
                    .await
                    .map_err(|_| CollectionError::TimedOut(limit)),
                None => Ok(fan_out.await),
            }
        }
        .instrument(span.clone());

        tokio::select! {
            biased;
            _ = cancel => {
                span.in_scope(|| warn!("Collection read cancelled"));
                Err(CollectionError::Cancelled)
            }
            outcome = traversal => outcome,
        }
    }

    /// Read a Redfish collection resource's member links
    pub async fn read_member_links(
        &self,
        context: &ConnectionContext,
        target: impl Into<LocatorTarget>,
    ) -> CollectionResult<Vec<UriPath>> {
        let path = ServiceRootLocator::new(context)?.resolve(target)?.to_path()?;
        self.reader
            .read_member_links(context, &path)
            .await
            .map_err(CollectionError::Members)
    }

    /// Locate a top-level collection, list its members and read them all
    ///
    /// Members the service lists more than once are read once.
    pub async fn read_service_collection<R: RedfishResource>(
        &self,
        context: &ConnectionContext,
        target: impl Into<LocatorTarget>,
    ) -> CollectionResult<CollectionOutcome<R>> {
        let members = self.read_member_links(context, target).await?;
        self.read_collection(context, dedup_members(members)).await
    }

    async fn fan_out<R: RedfishResource>(
        &self,
        context: &ConnectionContext,
        paths: Vec<UriPath>,
        traversal_id: Uuid,
    ) -> CollectionOutcome<R> {
        let reader = &self.reader;
        let results: Vec<(UriPath, Result<R, ReadFailure>)> = stream::iter(paths)
            .map(move |path| async move {
                let result = reader.read_resource::<R>(context, &path).await;
                (path, result)
            })
            .buffer_unordered(context.max_concurrency)
            .collect()
            .await;

        let mut members = BTreeMap::new();
        let mut failures = Vec::new();
        for (path, result) in results {
            match result {
                Ok(resource) => {
                    members.insert(path, resource);
                }
                Err(failure) => failures.push(LinkFailure {
                    traversal_id,
                    path,
                    failure,
                    occurred_at: Utc::now(),
                }),
            }
        }
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        for failure in &failures {
            self.reporter.report(failure);
        }
        info!(
            decoded = members.len(),
            failed = failures.len(),
            "Collection read complete"
        );

        CollectionOutcome {
            traversal_id,
            collection: ResourceCollection { members },
            failures,
        }
    }
}

/// Reject the input set if any path appears twice
fn unique_paths(paths: impl IntoIterator<Item = UriPath>) -> CollectionResult<Vec<UriPath>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for path in paths {
        if !seen.insert(path.clone()) {
            return Err(CollectionError::DuplicatePath(path));
        }
        unique.push(path);
    }
    Ok(unique)
}

/// Drop repeated member links listed by the service
fn dedup_members(members: Vec<UriPath>) -> Vec<UriPath> {
    let mut seen = HashSet::new();
    members
        .into_iter()
        .filter(|path| {
            let first = seen.insert(path.clone());
            if !first {
                warn!(%path, "Service listed a collection member twice, reading it once");
            }
            first
        })
        .collect()
}
