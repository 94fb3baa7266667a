// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field-level decode helpers shared by resource documents
//!
//! Each helper turns one loosely-typed wire field into its validated form and
//! tags failures with the Redfish property name.

use serde::Deserialize;

use super::keyword::{KeywordLookup, KeywordRegistry, ProtocolEnum};
use super::{BoundedString, CompositeNumericReading, SignedReading, UriPath};
use crate::errors::ValidationError;

/// `{"@odata.id": "/redfish/v1/..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ODataLink {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

/// Redfish collection body; only the member links matter here
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectionDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<ODataLink>>,
}

impl CollectionDocument {
    pub fn member_paths(self) -> Result<Vec<UriPath>, ValidationError> {
        links("Members", self.members)
    }
}

pub(crate) fn optional_bounded<const MAX: usize>(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<BoundedString<MAX>>, ValidationError> {
    value
        .map(|value| {
            BoundedString::new(value)
                .map_err(|source| ValidationError::BoundedString { field, source })
        })
        .transpose()
}

pub(crate) fn required_bounded<const MAX: usize>(
    field: &'static str,
    value: Option<String>,
) -> Result<BoundedString<MAX>, ValidationError> {
    optional_bounded(field, value)?.ok_or(ValidationError::MissingField(field))
}

pub(crate) fn link(
    field: &'static str,
    value: Option<ODataLink>,
) -> Result<Option<UriPath>, ValidationError> {
    value
        .map(|link| {
            UriPath::new(&link.odata_id).map_err(|source| ValidationError::UriPath { field, source })
        })
        .transpose()
}

pub(crate) fn links(
    field: &'static str,
    value: Option<Vec<ODataLink>>,
) -> Result<Vec<UriPath>, ValidationError> {
    value
        .unwrap_or_default()
        .into_iter()
        .map(|link| {
            UriPath::new(&link.odata_id).map_err(|source| ValidationError::UriPath { field, source })
        })
        .collect()
}

/// Keyword field that keeps unrecognized vendor values
pub(crate) fn tolerant<E: ProtocolEnum>(
    registry: &KeywordRegistry,
    value: Option<String>,
) -> Option<KeywordLookup<E>> {
    value.map(|keyword| registry.lookup::<E>(&keyword))
}

/// Keyword field where an unrecognized value is a validation failure
pub(crate) fn strict<E: ProtocolEnum>(
    registry: &KeywordRegistry,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<E>, ValidationError> {
    match tolerant::<E>(registry, value) {
        None => Ok(None),
        Some(KeywordLookup::Known(variant)) => Ok(Some(variant)),
        Some(KeywordLookup::Unknown(keyword)) => {
            Err(ValidationError::UnknownKeyword { field, keyword })
        }
    }
}

pub(crate) fn signed_reading(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<SignedReading>, ValidationError> {
    value
        .map(|value| {
            SignedReading::from_decimal(value)
                .map_err(|source| ValidationError::NumericReading { field, source })
        })
        .transpose()
}

pub(crate) fn reading(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<CompositeNumericReading>, ValidationError> {
    value
        .map(|value| {
            CompositeNumericReading::from_decimal(value)
                .map_err(|source| ValidationError::NumericReading { field, source })
        })
        .transpose()
}
