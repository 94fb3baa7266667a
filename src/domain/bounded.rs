// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bounded String Value Object
//!
//! Redfish string properties (model names, manufacturers, serial numbers, sensor
//! names, UEFI device paths) are stored as [`BoundedString`] with a compile-time
//! character limit. The limit is enforced once, at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Bounded string validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundedStringError {
    #[error("Value exceeds maximum length of {max} characters: {actual}")]
    TooLong { max: usize, actual: usize },
}

/// String with at most `MAX` characters
///
/// Length is counted in Unicode scalar values, not bytes, so a model name
/// such as `"PowerEdge R750 ™"` is measured the way a BMC reports it.
///
/// # Examples
///
/// ```rust
/// use cim_redfish::domain::BoundedString;
///
/// let name = BoundedString::<8>::new("R750").unwrap();
/// assert_eq!(name.as_str(), "R750");
///
/// assert!(BoundedString::<3>::new("R750").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedString<const MAX: usize>(String);

impl<const MAX: usize> BoundedString<MAX> {
    /// Maximum number of characters
    pub const MAX_LENGTH: usize = MAX;

    /// Create a new bounded string
    ///
    /// # Invariants
    /// - At most `MAX` characters
    pub fn new(value: impl Into<String>) -> Result<Self, BoundedStringError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > MAX {
            return Err(BoundedStringError::TooLong { max: MAX, actual });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<const MAX: usize> fmt::Display for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const MAX: usize> AsRef<str> for BoundedString<MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> TryFrom<String> for BoundedString<MAX> {
    type Error = BoundedStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const MAX: usize> TryFrom<&str> for BoundedString<MAX> {
    type Error = BoundedStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const MAX: usize> From<BoundedString<MAX>> for String {
    fn from(value: BoundedString<MAX>) -> Self {
        value.0
    }
}

/// Resource display name (`Name`)
pub type ResourceName = BoundedString<128>;

/// Chassis or system model (`Model`)
pub type ModelName = BoundedString<64>;

/// Hardware manufacturer (`Manufacturer`)
pub type Manufacturer = BoundedString<64>;

/// Serial number (`SerialNumber`)
pub type SerialNumber = BoundedString<64>;

/// Part number (`PartNumber`)
pub type PartNumber = BoundedString<64>;

/// Sensor name (`Name` on sensors and voltage readings)
pub type SensorName = BoundedString<64>;

/// UEFI device path used as a one-time boot target
pub type UefiTargetPath = BoundedString<255>;
