// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sensors
//!
//! A [`Sensor`] is a plain value: equality is structural over every field, so
//! two reads of an unchanged sensor compare equal. [`VoltageSensor`] is the
//! specialization carried in a power subsystem's `Voltages` array.
//!
//! Generic readings are signed, since temperature sensors report below zero.
//! Voltage readings stay non-negative.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::decode::{optional_bounded, reading, required_bounded, signed_reading};
use super::keyword::KeywordRegistry;
use super::resource::RedfishResource;
use super::resource_id::kind;
use super::{SensorName, SignedReading, UriPath, Volts};
use crate::errors::ValidationError;

/// Units string Redfish uses for voltage readings
pub const VOLTS_UNITS: &str = "V";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sensor {
    name: SensorName,
    number: Option<u32>,
    reading: Option<SignedReading>,
    reading_units: Option<String>,
}

impl Sensor {
    pub fn new(
        name: SensorName,
        number: Option<u32>,
        reading: Option<SignedReading>,
        reading_units: Option<String>,
    ) -> Self {
        Self {
            name,
            number,
            reading,
            reading_units,
        }
    }

    pub fn name(&self) -> &SensorName {
        &self.name
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn reading(&self) -> Option<SignedReading> {
        self.reading
    }

    pub fn reading_units(&self) -> Option<&str> {
        self.reading_units.as_deref()
    }
}

/// `/redfish/v1/Chassis/{id}/Sensors/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SensorDocument {
    pub name: Option<String>,
    pub sensor_number: Option<u32>,
    pub reading: Option<f64>,
    pub reading_units: Option<String>,
}

impl RedfishResource for Sensor {
    type Kind = kind::Sensor;
    type Document = SensorDocument;

    fn from_document(
        _path: &UriPath,
        document: SensorDocument,
        _registry: &KeywordRegistry,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_bounded("Name", document.name)?,
            number: document.sensor_number,
            reading: signed_reading("Reading", document.reading)?,
            reading_units: document.reading_units,
        })
    }
}

/// Voltage probe from `Power.Voltages[]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VoltageSensor(Sensor);

impl VoltageSensor {
    pub fn new(name: SensorName, number: Option<u32>, reading_volts: Option<Volts>) -> Self {
        Self(Sensor::new(
            name,
            number,
            reading_volts.map(SignedReading::from),
            Some(VOLTS_UNITS.to_string()),
        ))
    }

    pub fn reading_volts(&self) -> Option<Volts> {
        self.0.reading.and_then(|reading| reading.non_negative())
    }

    pub fn into_sensor(self) -> Sensor {
        self.0
    }
}

impl Deref for VoltageSensor {
    type Target = Sensor;

    fn deref(&self) -> &Sensor {
        &self.0
    }
}

/// One entry of `Power.Voltages[]`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoltageDocument {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub sensor_number: Option<u32>,
    pub reading_volts: Option<f64>,
}

impl VoltageSensor {
    pub(crate) fn from_document(document: VoltageDocument) -> Result<Self, ValidationError> {
        // Some BMCs leave Name empty and only fill MemberId
        let name = match optional_bounded("Voltages.Name", document.name)? {
            Some(name) => name,
            None => required_bounded("Voltages.MemberId", document.member_id)?,
        };
        Ok(Self::new(
            name,
            document.sensor_number,
            reading("Voltages.ReadingVolts", document.reading_volts)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Sensor, ValidationError> {
        let registry = KeywordRegistry::new().unwrap();
        let path = UriPath::new("/redfish/v1/Chassis/1U/Sensors/CPU1Temp").unwrap();
        Sensor::from_document(&path, serde_json::from_value(value).unwrap(), &registry)
    }

    #[test]
    fn test_sensor_decodes() {
        let sensor = decode(json!({
            "Id": "CPU1Temp",
            "Name": "CPU #1 Temperature",
            "Reading": 41.5,
            "ReadingUnits": "Cel"
        }))
        .unwrap();
        assert_eq!(sensor.name().as_str(), "CPU #1 Temperature");
        assert_eq!(sensor.number(), None);
        assert_eq!(sensor.reading().map(|r| r.to_string()), Some("41.5".to_string()));
        assert_eq!(sensor.reading_units(), Some("Cel"));
    }

    #[test]
    fn test_sensor_equality_is_structural() {
        let body = json!({"Name": "Inlet", "SensorNumber": 3, "Reading": 22.0});
        assert_eq!(decode(body.clone()).unwrap(), decode(body).unwrap());

        let other = decode(json!({"Name": "Inlet", "SensorNumber": 4, "Reading": 22.0})).unwrap();
        assert_ne!(decode(json!({"Name": "Inlet", "SensorNumber": 3, "Reading": 22.0})).unwrap(), other);
    }

    #[test]
    fn test_sensor_name_too_long() {
        let result = decode(json!({"Name": "x".repeat(65)}));
        assert!(matches!(
            result,
            Err(ValidationError::BoundedString { field: "Name", .. })
        ));
    }

    #[test]
    fn test_sub_zero_temperature_decodes() {
        let sensor = decode(json!({
            "Name": "Outlet Ambient",
            "Reading": -12.5,
            "ReadingUnits": "Cel"
        }))
        .unwrap();
        let reading = sensor.reading().unwrap();
        assert!(reading.is_negative());
        assert_eq!(reading.to_string(), "-12.5");
    }

    #[test]
    fn test_unrepresentable_reading_rejected() {
        let result = decode(json!({"Name": "Fan", "Reading": 1e300}));
        assert!(matches!(
            result,
            Err(ValidationError::NumericReading { field: "Reading", .. })
        ));
    }

    #[test]
    fn test_voltage_sensor_falls_back_to_member_id() {
        let voltage = VoltageSensor::from_document(
            serde_json::from_value(json!({"MemberId": "VR0", "ReadingVolts": 12.1})).unwrap(),
        )
        .unwrap();
        assert_eq!(voltage.name().as_str(), "VR0");
        assert_eq!(voltage.reading_units(), Some(VOLTS_UNITS));
        assert_eq!(voltage.reading_volts().unwrap().major(), 12);
        assert_eq!(voltage.reading_volts().unwrap().minor(), 1);
    }
}
