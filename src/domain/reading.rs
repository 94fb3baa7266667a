// Copyright (c) 2025 - Cowboy AI, Inc.
//! Composite Numeric Readings
//!
//! Power and voltage readings are carried as a whole part plus a base-10
//! fractional part so that a reading renders exactly as the BMC reported it,
//! without floating point noise.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric reading validation error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericReadingError {
    #[error("Reading component must be non-negative: major={major}, minor={minor}")]
    Negative { major: i64, minor: i64 },

    #[error("Reading is not a finite number: {0}")]
    NotFinite(f64),

    #[error("Reading is negative: {0}")]
    NegativeDecimal(f64),

    #[error("Reading is too large to represent: {0}")]
    OutOfRange(f64),
}

/// Two-part non-negative numeric reading rendered as `major.minor`
///
/// # Examples
///
/// ```rust
/// use cim_redfish::domain::CompositeNumericReading;
///
/// let watts = CompositeNumericReading::new(344, 5).unwrap();
/// assert_eq!(watts.to_string(), "344.5");
///
/// assert!(CompositeNumericReading::new(-1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeNumericReading {
    major: u64,
    minor: u64,
}

impl CompositeNumericReading {
    /// Create a reading from its two components
    ///
    /// # Invariants
    /// - `major >= 0`
    /// - `minor >= 0`
    pub fn new(major: i64, minor: i64) -> Result<Self, NumericReadingError> {
        if major < 0 || minor < 0 {
            return Err(NumericReadingError::Negative { major, minor });
        }
        Ok(Self {
            major: major as u64,
            minor: minor as u64,
        })
    }

    /// Create a reading from a JSON number, keeping one decimal place
    ///
    /// `12.06` becomes `12.1`, `229.96` becomes `230.0`.
    pub fn from_decimal(value: f64) -> Result<Self, NumericReadingError> {
        if !value.is_finite() {
            return Err(NumericReadingError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(NumericReadingError::NegativeDecimal(value));
        }
        let scaled = (value * 10.0).round();
        if scaled >= u64::MAX as f64 {
            return Err(NumericReadingError::OutOfRange(value));
        }
        let tenths = scaled as u64;
        Ok(Self {
            major: tenths / 10,
            minor: tenths % 10,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0
    }
}

impl fmt::Display for CompositeNumericReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Generic sensor reading, which may sit below zero (temperatures in `Cel`)
///
/// Stored as a sign plus a [`CompositeNumericReading`] magnitude. Zero is
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedReading {
    negative: bool,
    magnitude: CompositeNumericReading,
}

impl SignedReading {
    /// Create a reading from a JSON number, keeping one decimal place
    pub fn from_decimal(value: f64) -> Result<Self, NumericReadingError> {
        if !value.is_finite() {
            return Err(NumericReadingError::NotFinite(value));
        }
        let magnitude = CompositeNumericReading::from_decimal(value.abs())
            .map_err(|_| NumericReadingError::OutOfRange(value))?;
        Ok(Self {
            negative: value < 0.0 && !magnitude.is_zero(),
            magnitude,
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> CompositeNumericReading {
        self.magnitude
    }

    /// The reading as a non-negative value, `None` when below zero
    pub fn non_negative(&self) -> Option<CompositeNumericReading> {
        (!self.negative).then_some(self.magnitude)
    }
}

impl From<CompositeNumericReading> for SignedReading {
    fn from(magnitude: CompositeNumericReading) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }
}

impl fmt::Display for SignedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

/// Power reading in watts
pub type Watts = CompositeNumericReading;

/// Voltage reading in volts
pub type Volts = CompositeNumericReading;
