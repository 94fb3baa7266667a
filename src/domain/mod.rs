// Copyright (c) 2025 - Cowboy AI, Inc.
//! Redfish Domain Models
//!
//! Typed, validated, immutable views of the resources a Redfish service
//! exposes. Every value is checked at construction, so holding one is proof
//! that it satisfies its invariants.
//!
//! # Value Objects with Invariants
//!
//! - [`BoundedString`] - strings with a maximum character count
//! - [`CompositeNumericReading`] - non-negative `major.minor` readings
//! - [`SignedReading`] - generic sensor readings that may be negative
//! - [`UriPath`] - normalized resource paths, the durable resource key
//! - [`ResourceId`] - process-scoped sequence identifiers
//! - [`ActionProperties`] - invocable operations, totally ordered by name
//!
//! # Protocol Enumerations
//!
//! [`BootSource`], [`PowerState`], [`SystemType`], [`BootSourceOverrideEnabled`]
//! and [`PowerLimitException`] all implement [`ProtocolEnum`]; lookups go
//! through a [`KeywordRegistry`].
//!
//! # Resources
//!
//! - [`ServiceRoot`]
//! - [`Chassis`]
//! - [`ComputerSystem`]
//! - [`Power`]
//! - [`Sensor`] and [`VoltageSensor`]

pub mod action;
pub mod bounded;
pub mod chassis;
pub mod computer_system;
pub mod decode;
pub mod enums;
pub mod keyword;
pub mod power;
pub mod reading;
pub mod resource;
pub mod resource_id;
pub mod sensor;
pub mod service_root;
pub mod uri_path;

// Re-export value objects
pub use action::ActionProperties;
pub use bounded::{
    BoundedString, BoundedStringError, Manufacturer, ModelName, PartNumber, ResourceName,
    SensorName, SerialNumber, UefiTargetPath,
};
pub use decode::{CollectionDocument, ODataLink};
pub use enums::{BootSource, BootSourceOverrideEnabled, PowerLimitException, PowerState, SystemType};
pub use keyword::{KeywordLookup, KeywordRegistry, KeywordTable, KeywordTableError, ProtocolEnum};
pub use reading::{CompositeNumericReading, NumericReadingError, SignedReading, Volts, Watts};
pub use resource::RedfishResource;
pub use resource_id::{kind, ResourceId, ResourceKind};
pub use uri_path::{UriPath, UriPathError};

// Re-export resources
pub use chassis::Chassis;
pub use computer_system::{Boot, ComputerSystem};
pub use power::{Power, PowerControl, PowerLimit};
pub use sensor::{Sensor, VoltageSensor};
pub use service_root::ServiceRoot;
