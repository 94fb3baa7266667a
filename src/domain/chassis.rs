// Copyright (c) 2025 - Cowboy AI, Inc.
//! Chassis
//!
//! Physical enclosure: identification fields plus links to the computer
//! systems it houses, nested chassis, and its power and sensor subsystems.

use serde::{Deserialize, Serialize};

use super::decode::{link, links, optional_bounded, tolerant, ODataLink};
use super::enums::PowerState;
use super::keyword::{KeywordLookup, KeywordRegistry};
use super::resource::RedfishResource;
use super::resource_id::{kind, ResourceId};
use super::{Manufacturer, ModelName, PartNumber, ResourceName, SerialNumber, UriPath};
use crate::errors::ValidationError;

#[derive(Debug, Clone, Serialize)]
pub struct Chassis {
    id: ResourceId<kind::Chassis>,
    path: UriPath,
    member_id: Option<String>,
    name: Option<ResourceName>,
    chassis_type: Option<String>,
    manufacturer: Option<Manufacturer>,
    model: Option<ModelName>,
    serial_number: Option<SerialNumber>,
    part_number: Option<PartNumber>,
    power_state: Option<KeywordLookup<PowerState>>,
    computer_systems: Vec<UriPath>,
    contains: Vec<UriPath>,
    contained_by: Option<UriPath>,
    power: Option<UriPath>,
    sensors: Option<UriPath>,
}

impl Chassis {
    pub fn id(&self) -> ResourceId<kind::Chassis> {
        self.id
    }

    /// Path the chassis was read from
    pub fn path(&self) -> &UriPath {
        &self.path
    }

    /// Redfish `Id` property
    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref()
    }

    pub fn name(&self) -> Option<&ResourceName> {
        self.name.as_ref()
    }

    /// `ChassisType` is kept verbatim (`RackMount`, `Blade`, `Enclosure`, ...)
    pub fn chassis_type(&self) -> Option<&str> {
        self.chassis_type.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&Manufacturer> {
        self.manufacturer.as_ref()
    }

    pub fn model(&self) -> Option<&ModelName> {
        self.model.as_ref()
    }

    pub fn serial_number(&self) -> Option<&SerialNumber> {
        self.serial_number.as_ref()
    }

    pub fn part_number(&self) -> Option<&PartNumber> {
        self.part_number.as_ref()
    }

    pub fn power_state(&self) -> Option<&KeywordLookup<PowerState>> {
        self.power_state.as_ref()
    }

    /// `Links.ComputerSystems`
    pub fn computer_systems(&self) -> &[UriPath] {
        &self.computer_systems
    }

    /// `Links.Contains`
    pub fn contains(&self) -> &[UriPath] {
        &self.contains
    }

    pub fn contained_by(&self) -> Option<&UriPath> {
        self.contained_by.as_ref()
    }

    pub fn power(&self) -> Option<&UriPath> {
        self.power.as_ref()
    }

    pub fn sensors(&self) -> Option<&UriPath> {
        self.sensors.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChassisLinksDocument {
    pub computer_systems: Option<Vec<ODataLink>>,
    pub contains: Option<Vec<ODataLink>>,
    pub contained_by: Option<ODataLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChassisDocument {
    pub id: Option<String>,
    pub name: Option<String>,
    pub chassis_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub part_number: Option<String>,
    pub power_state: Option<String>,
    pub links: Option<ChassisLinksDocument>,
    pub power: Option<ODataLink>,
    pub sensors: Option<ODataLink>,
}

impl RedfishResource for Chassis {
    type Kind = kind::Chassis;
    type Document = ChassisDocument;

    fn from_document(
        path: &UriPath,
        document: ChassisDocument,
        registry: &KeywordRegistry,
    ) -> Result<Self, ValidationError> {
        let document_links = document.links.unwrap_or_default();

        Ok(Self {
            id: ResourceId::next(),
            path: path.clone(),
            member_id: document.id,
            name: optional_bounded("Name", document.name)?,
            chassis_type: document.chassis_type,
            manufacturer: optional_bounded("Manufacturer", document.manufacturer)?,
            model: optional_bounded("Model", document.model)?,
            serial_number: optional_bounded("SerialNumber", document.serial_number)?,
            part_number: optional_bounded("PartNumber", document.part_number)?,
            power_state: tolerant(registry, document.power_state),
            computer_systems: links("Links.ComputerSystems", document_links.computer_systems)?,
            contains: links("Links.Contains", document_links.contains)?,
            contained_by: link("Links.ContainedBy", document_links.contained_by)?,
            power: link("Power", document.power)?,
            sensors: link("Sensors", document.sensors)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Chassis, ValidationError> {
        let registry = KeywordRegistry::new().unwrap();
        let path = UriPath::new("/redfish/v1/Chassis/1U").unwrap();
        Chassis::from_document(&path, serde_json::from_value(value).unwrap(), &registry)
    }

    #[test]
    fn test_chassis_decodes() {
        let chassis = decode(json!({
            "@odata.id": "/redfish/v1/Chassis/1U",
            "Id": "1U",
            "Name": "Computer System Chassis",
            "ChassisType": "RackMount",
            "Manufacturer": "Contoso",
            "Model": "3500RX",
            "SerialNumber": "437XR1138R2",
            "PartNumber": "224071-J23",
            "PowerState": "On",
            "Links": {
                "ComputerSystems": [{"@odata.id": "/redfish/v1/Systems/437XR1138R2"}],
                "ManagedBy": [{"@odata.id": "/redfish/v1/Managers/BMC"}]
            },
            "Power": {"@odata.id": "/redfish/v1/Chassis/1U/Power"},
            "Sensors": {"@odata.id": "/redfish/v1/Chassis/1U/Sensors"}
        }))
        .unwrap();

        assert_eq!(chassis.id().prefix(), "Cha");
        assert_eq!(chassis.member_id(), Some("1U"));
        assert_eq!(chassis.model().unwrap().as_str(), "3500RX");
        assert_eq!(chassis.manufacturer().unwrap().as_str(), "Contoso");
        assert_eq!(chassis.chassis_type(), Some("RackMount"));
        assert_eq!(chassis.power_state().unwrap().known(), Some(PowerState::On));
        assert_eq!(
            chassis.computer_systems(),
            &[UriPath::new("/redfish/v1/Systems/437XR1138R2").unwrap()]
        );
        assert!(chassis.contains().is_empty());
        assert_eq!(chassis.power().unwrap().as_str(), "/redfish/v1/Chassis/1U/Power");
    }

    #[test]
    fn test_vendor_power_state_is_kept() {
        let chassis = decode(json!({"PowerState": "StandbyOffline"})).unwrap();
        assert_eq!(
            chassis.power_state(),
            Some(&KeywordLookup::Unknown("StandbyOffline".into()))
        );
    }

    #[test]
    fn test_model_too_long_fails() {
        let result = decode(json!({"Model": "M".repeat(65)}));
        assert!(matches!(
            result,
            Err(ValidationError::BoundedString { field: "Model", .. })
        ));
    }

    #[test]
    fn test_ids_are_distinct_per_decode() {
        let a = decode(json!({})).unwrap();
        let b = decode(json!({})).unwrap();
        assert_ne!(a.id(), b.id());
        assert!(a.id() < b.id());
    }
}
