// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-redfish
//!
//! A small, deterministic Redfish service modeled on the DMTF mockups:
//! three rack chassis, two computer systems, and one power subsystem.
//!
//! - `/redfish/v1/Chassis/2U` is listed in the chassis collection but absent
//!   from the service, so reading it yields HTTP 404.
//! - `/redfish/v1/Chassis/1U` links a computer system (`Systems/Ghost`) that
//!   the systems collection does not contain.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;

use cim_redfish::adapters::InMemoryFetcher;
use cim_redfish::domain::{KeywordRegistry, UriPath};
use cim_redfish::reader::{CollectionReader, ResourceReader};
use cim_redfish::ConnectionContext;

pub const CHASSIS_1U: &str = "/redfish/v1/Chassis/1U";
pub const CHASSIS_2U: &str = "/redfish/v1/Chassis/2U";
pub const CHASSIS_4U: &str = "/redfish/v1/Chassis/4U";

pub const SYSTEM_WEB: &str = "/redfish/v1/Systems/Web483";
pub const SYSTEM_DB: &str = "/redfish/v1/Systems/Db12";
pub const SYSTEM_GHOST: &str = "/redfish/v1/Systems/Ghost";

pub fn path(value: &str) -> UriPath {
    UriPath::new(value).expect("fixture path is valid")
}

pub fn context() -> ConnectionContext {
    ConnectionContext::new("bmc.example.com")
}

pub fn service_root() -> Value {
    json!({
        "@odata.id": "/redfish/v1/",
        "@odata.type": "#ServiceRoot.v1_15_0.ServiceRoot",
        "Id": "RootService",
        "Name": "Root Service",
        "RedfishVersion": "1.15.0",
        "UUID": "92384634-2938-2342-8820-489239905423",
        "Chassis": {"@odata.id": "/redfish/v1/Chassis"},
        "Systems": {"@odata.id": "/redfish/v1/Systems"},
        "Managers": {"@odata.id": "/redfish/v1/Managers"},
        "Links": {"Sessions": {"@odata.id": "/redfish/v1/SessionService/Sessions"}}
    })
}

pub fn chassis(id: &str, model: &str, systems: &[&str]) -> Value {
    let links: Vec<Value> = systems
        .iter()
        .map(|system| json!({"@odata.id": system}))
        .collect();
    json!({
        "@odata.id": format!("/redfish/v1/Chassis/{}", id),
        "@odata.type": "#Chassis.v1_23_0.Chassis",
        "Id": id,
        "Name": format!("Chassis {}", id),
        "ChassisType": "RackMount",
        "Manufacturer": "Contoso",
        "Model": model,
        "SerialNumber": format!("SN-{}", id),
        "PowerState": "On",
        "Links": {"ComputerSystems": links},
        "Power": {"@odata.id": format!("/redfish/v1/Chassis/{}/Power", id)}
    })
}

pub fn computer_system(id: &str, chassis: &str) -> Value {
    json!({
        "@odata.id": format!("/redfish/v1/Systems/{}", id),
        "@odata.type": "#ComputerSystem.v1_20_0.ComputerSystem",
        "Id": id,
        "Name": id,
        "SystemType": "Physical",
        "Manufacturer": "Contoso",
        "Model": "3500RX",
        "PowerState": "On",
        "Boot": {
            "BootSourceOverrideEnabled": "Disabled",
            "BootSourceOverrideTarget": "None",
            "BootSourceOverrideTarget@Redfish.AllowableValues": ["None", "Pxe", "Hdd", "BiosSetup"]
        },
        "Links": {"Chassis": [{"@odata.id": chassis}]},
        "Actions": {
            "#ComputerSystem.Reset": {
                "target": format!("/redfish/v1/Systems/{}/Actions/ComputerSystem.Reset", id),
                "ResetType@Redfish.AllowableValues": ["On", "ForceOff", "GracefulShutdown"]
            }
        }
    })
}

pub fn members(paths: &[&str]) -> Value {
    let members: Vec<Value> = paths.iter().map(|p| json!({"@odata.id": p})).collect();
    json!({
        "Members@odata.count": members.len(),
        "Members": members
    })
}

/// The whole mock service
pub fn mock_service() -> InMemoryFetcher {
    InMemoryFetcher::new()
        .with_json("/redfish/v1", service_root())
        .with_json("/redfish/v1/Chassis", members(&[CHASSIS_1U, CHASSIS_2U, CHASSIS_4U]))
        .with_json(CHASSIS_1U, chassis("1U", "3500RX", &[SYSTEM_WEB, SYSTEM_GHOST]))
        .with_json(CHASSIS_4U, chassis("4U", "7800RX", &[SYSTEM_DB]))
        .with_json("/redfish/v1/Systems", members(&[SYSTEM_WEB, SYSTEM_DB]))
        .with_json(SYSTEM_WEB, computer_system("Web483", CHASSIS_1U))
        .with_json(SYSTEM_DB, computer_system("Db12", CHASSIS_4U))
        .with_json(
            "/redfish/v1/Chassis/1U/Power",
            json!({
                "PowerControl": [{
                    "MemberId": "0",
                    "Name": "System Power Control",
                    "PowerConsumedWatts": 344.5,
                    "PowerLimit": {"LimitInWatts": 500, "LimitException": "LogEventOnly"}
                }],
                "Voltages": [
                    {"MemberId": "0", "Name": "VRM1 Voltage", "SensorNumber": 11, "ReadingVolts": 12.06}
                ]
            }),
        )
}

pub fn registry() -> Arc<KeywordRegistry> {
    Arc::new(KeywordRegistry::new().expect("keyword tables are well formed"))
}

pub fn collection_reader(fetcher: InMemoryFetcher) -> CollectionReader<InMemoryFetcher> {
    CollectionReader::new(ResourceReader::new(fetcher, registry()))
}
