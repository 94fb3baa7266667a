// Copyright (c) 2025 - Cowboy AI, Inc.
//! Computer System (`/redfish/v1/Systems/{id}`)

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::action::ActionProperties;
use super::decode::{links, optional_bounded, strict, tolerant, ODataLink};
use super::enums::{BootSource, BootSourceOverrideEnabled, PowerState, SystemType};
use super::keyword::{KeywordLookup, KeywordRegistry};
use super::resource::RedfishResource;
use super::resource_id::{kind, ResourceId};
use super::{Manufacturer, ModelName, ResourceName, SerialNumber, UefiTargetPath, UriPath};
use crate::errors::ValidationError;

/// Boot override settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boot {
    pub override_target: Option<KeywordLookup<BootSource>>,
    pub override_enabled: Option<BootSourceOverrideEnabled>,
    pub uefi_target: Option<UefiTargetPath>,
    /// `BootSourceOverrideTarget@Redfish.AllowableValues`
    pub allowable_targets: Vec<KeywordLookup<BootSource>>,
}

impl Boot {
    /// Whether `target` is advertised as an allowable override target
    pub fn allows(&self, target: BootSource) -> bool {
        self.allowable_targets
            .iter()
            .any(|allowed| allowed.known() == Some(target))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComputerSystem {
    id: ResourceId<kind::ComputerSystem>,
    path: UriPath,
    member_id: Option<String>,
    name: Option<ResourceName>,
    system_type: Option<SystemType>,
    manufacturer: Option<Manufacturer>,
    model: Option<ModelName>,
    serial_number: Option<SerialNumber>,
    host_name: Option<String>,
    bios_version: Option<String>,
    power_state: Option<KeywordLookup<PowerState>>,
    boot: Option<Boot>,
    chassis: Vec<UriPath>,
    managed_by: Vec<UriPath>,
    actions: Vec<ActionProperties>,
}

impl ComputerSystem {
    pub fn id(&self) -> ResourceId<kind::ComputerSystem> {
        self.id
    }

    pub fn path(&self) -> &UriPath {
        &self.path
    }

    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref()
    }

    pub fn name(&self) -> Option<&ResourceName> {
        self.name.as_ref()
    }

    pub fn system_type(&self) -> Option<SystemType> {
        self.system_type
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

    pub fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }

    pub fn bios_version(&self) -> Option<&str> {
        self.bios_version.as_deref()
    }

    pub fn power_state(&self) -> Option<&KeywordLookup<PowerState>> {
        self.power_state.as_ref()
    }

    pub fn boot(&self) -> Option<&Boot> {
        self.boot.as_ref()
    }

    /// `Links.Chassis`
    pub fn chassis(&self) -> &[UriPath] {
        &self.chassis
    }

    /// `Links.ManagedBy`
    pub fn managed_by(&self) -> &[UriPath] {
        &self.managed_by
    }

    /// Sorted by action name
    pub fn actions(&self) -> &[ActionProperties] {
        &self.actions
    }

    pub fn action(&self, name: &str) -> Option<&ActionProperties> {
        self.actions
            .binary_search_by(|action| action.name().cmp(name))
            .ok()
            .map(|index| &self.actions[index])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BootDocument {
    pub boot_source_override_target: Option<String>,
    pub boot_source_override_enabled: Option<String>,
    pub uefi_target_boot_source_override: Option<String>,
    #[serde(rename = "BootSourceOverrideTarget@Redfish.AllowableValues")]
    pub allowable_targets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystemLinksDocument {
    pub chassis: Option<Vec<ODataLink>>,
    pub managed_by: Option<Vec<ODataLink>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystemDocument {
    pub id: Option<String>,
    pub name: Option<String>,
    pub system_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub host_name: Option<String>,
    pub bios_version: Option<String>,
    pub power_state: Option<String>,
    pub boot: Option<BootDocument>,
    pub links: Option<ComputerSystemLinksDocument>,
    pub actions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl RedfishResource for ComputerSystem {
    type Kind = kind::ComputerSystem;
    type Document = ComputerSystemDocument;

    fn from_document(
        path: &UriPath,
        document: ComputerSystemDocument,
        registry: &KeywordRegistry,
    ) -> Result<Self, ValidationError> {
        let boot = document
            .boot
            .map(|boot| decode_boot(boot, registry))
            .transpose()?;
        let document_links = document.links.unwrap_or_default();

        let (actions, skipped) = document
            .actions
            .as_ref()
            .map(ActionProperties::from_actions_object)
            .unwrap_or_default();
        for key in skipped {
            warn!(path = %path, action = %key, "Skipping action without a valid target");
        }

        Ok(Self {
            id: ResourceId::next(),
            path: path.clone(),
            member_id: document.id,
            name: optional_bounded("Name", document.name)?,
            system_type: strict(registry, "SystemType", document.system_type)?,
            manufacturer: optional_bounded("Manufacturer", document.manufacturer)?,
            model: optional_bounded("Model", document.model)?,
            serial_number: optional_bounded("SerialNumber", document.serial_number)?,
            host_name: document.host_name,
            bios_version: document.bios_version,
            power_state: tolerant(registry, document.power_state),
            boot,
            chassis: links("Links.Chassis", document_links.chassis)?,
            managed_by: links("Links.ManagedBy", document_links.managed_by)?,
            actions,
        })
    }
}

fn decode_boot(document: BootDocument, registry: &KeywordRegistry) -> Result<Boot, ValidationError> {
    Ok(Boot {
        override_target: tolerant(registry, document.boot_source_override_target),
        override_enabled: strict(
            registry,
            "Boot.BootSourceOverrideEnabled",
            document.boot_source_override_enabled,
        )?,
        uefi_target: optional_bounded(
            "Boot.UefiTargetBootSourceOverride",
            document.uefi_target_boot_source_override,
        )?,
        allowable_targets: document
            .allowable_targets
            .unwrap_or_default()
            .iter()
            .map(|keyword| registry.lookup::<BootSource>(keyword))
            .collect(),
    })
}
