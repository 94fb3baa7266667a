// Copyright (c) 2025 - Cowboy AI, Inc.
//! Power subsystem (`/redfish/v1/Chassis/{id}/Power`)

use serde::{Deserialize, Serialize};

use super::decode::{optional_bounded, reading, strict};
use super::enums::PowerLimitException;
use super::keyword::KeywordRegistry;
use super::resource::RedfishResource;
use super::resource_id::{kind, ResourceId};
use super::sensor::{VoltageDocument, VoltageSensor};
use super::{ResourceName, UriPath, Watts};
use crate::errors::ValidationError;

/// Power cap configured on a power control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerLimit {
    pub limit_in_watts: Option<Watts>,
    pub limit_exception: Option<PowerLimitException>,
    pub correction_in_ms: Option<u64>,
}

/// One entry of `PowerControl[]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerControl {
    pub member_id: Option<String>,
    pub name: Option<ResourceName>,
    pub consumed_watts: Option<Watts>,
    pub capacity_watts: Option<Watts>,
    pub limit: Option<PowerLimit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Power {
    id: ResourceId<kind::Power>,
    path: UriPath,
    power_control: Vec<PowerControl>,
    voltages: Vec<VoltageSensor>,
}

impl Power {
    pub fn id(&self) -> ResourceId<kind::Power> {
        self.id
    }

    pub fn path(&self) -> &UriPath {
        &self.path
    }

    pub fn power_control(&self) -> &[PowerControl] {
        &self.power_control
    }

    pub fn voltages(&self) -> &[VoltageSensor] {
        &self.voltages
    }

    /// Sum of `PowerConsumedWatts` over every power control that reports it
    pub fn total_consumed_tenths(&self) -> u64 {
        self.power_control
            .iter()
            .filter_map(|control| control.consumed_watts)
            .map(|watts| watts.major() * 10 + watts.minor())
            .sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerLimitDocument {
    pub limit_in_watts: Option<f64>,
    pub limit_exception: Option<String>,
    pub correction_in_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerControlDocument {
    pub member_id: Option<String>,
    pub name: Option<String>,
    pub power_consumed_watts: Option<f64>,
    pub power_capacity_watts: Option<f64>,
    pub power_limit: Option<PowerLimitDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerDocument {
    pub power_control: Option<Vec<PowerControlDocument>>,
    pub voltages: Option<Vec<VoltageDocument>>,
}

impl RedfishResource for Power {
    type Kind = kind::Power;
    type Document = PowerDocument;

    fn from_document(
        path: &UriPath,
        document: PowerDocument,
        registry: &KeywordRegistry,
    ) -> Result<Self, ValidationError> {
        let power_control = document
            .power_control
            .unwrap_or_default()
            .into_iter()
            .map(|control| decode_power_control(control, registry))
            .collect::<Result<Vec<_>, _>>()?;
        let voltages = document
            .voltages
            .unwrap_or_default()
            .into_iter()
            .map(VoltageSensor::from_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: ResourceId::next(),
            path: path.clone(),
            power_control,
            voltages,
        })
    }
}

fn decode_power_control(
    document: PowerControlDocument,
    registry: &KeywordRegistry,
) -> Result<PowerControl, ValidationError> {
    let limit = document
        .power_limit
        .map(|limit| -> Result<PowerLimit, ValidationError> {
            Ok(PowerLimit {
                limit_in_watts: reading("PowerLimit.LimitInWatts", limit.limit_in_watts)?,
                limit_exception: strict(
                    registry,
                    "PowerLimit.LimitException",
                    limit.limit_exception,
                )?,
                correction_in_ms: limit.correction_in_ms,
            })
        })
        .transpose()?;

    Ok(PowerControl {
        member_id: document.member_id,
        name: optional_bounded("PowerControl.Name", document.name)?,
        consumed_watts: reading("PowerControl.PowerConsumedWatts", document.power_consumed_watts)?,
        capacity_watts: reading("PowerControl.PowerCapacityWatts", document.power_capacity_watts)?,
        limit,
    })
}
