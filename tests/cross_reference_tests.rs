// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cross-reference resolution over collections read from the mock service

mod fixtures;

use pretty_assertions::assert_eq;

use cim_redfish::domain::{Chassis, ComputerSystem};
use cim_redfish::ServiceRootIdentifier;
use fixtures::*;

#[tokio::test]
async fn test_chassis_systems_with_one_missing() {
    let reader = collection_reader(mock_service());
    let chassis = reader
        .read_service_collection::<Chassis>(&context(), ServiceRootIdentifier::Chassis)
        .await
        .unwrap()
        .into_collection();
    let systems = reader
        .read_service_collection::<ComputerSystem>(&context(), ServiceRootIdentifier::Systems)
        .await
        .unwrap()
        .into_collection();

    let rack = chassis.get(&path(CHASSIS_1U)).unwrap();
    let resolution = rack.resolve_computer_systems(&systems);

    assert_eq!(resolution.resolved.len(), 1);
    assert_eq!(resolution.resolved[0].0, &path(SYSTEM_WEB));
    assert_eq!(
        resolution.resolved[0].1.name().map(|n| n.as_str()),
        Some("Web483")
    );

    assert_eq!(resolution.unresolved.len(), 1);
    assert_eq!(
        resolution.unresolved[0].to_string(),
        format!("no computer system found at path {}", SYSTEM_GHOST)
    );
}

#[tokio::test]
async fn test_every_system_resolves_back_to_its_chassis() {
    let reader = collection_reader(mock_service());
    let chassis = reader
        .read_service_collection::<Chassis>(&context(), ServiceRootIdentifier::Chassis)
        .await
        .unwrap()
        .into_collection();
    let systems = reader
        .read_service_collection::<ComputerSystem>(&context(), ServiceRootIdentifier::Systems)
        .await
        .unwrap()
        .into_collection();

    for (_, system) in &systems {
        let resolution = system.resolve_chassis(&chassis);
        assert!(resolution.is_complete());
        assert_eq!(resolution.resources().count(), 1);
    }
}

#[tokio::test]
async fn test_reference_to_failed_member_is_unresolved() {
    let reader = collection_reader(
        mock_service().with_json(SYSTEM_GHOST, computer_system("Ghost", CHASSIS_2U)),
    );
    let chassis = reader
        .read_service_collection::<Chassis>(&context(), ServiceRootIdentifier::Chassis)
        .await
        .unwrap()
        .into_collection();
    let ghost: ComputerSystem = reader
        .resource_reader()
        .read_resource(&context(), &path(SYSTEM_GHOST))
        .await
        .unwrap();

    let resolution = ghost.resolve_chassis(&chassis);
    assert!(resolution.resolved.is_empty());
    assert_eq!(
        resolution.unresolved[0].to_string(),
        format!("no chassis found at path {}", CHASSIS_2U)
    );
}

#[tokio::test]
async fn test_no_contained_chassis() {
    let reader = collection_reader(mock_service());
    let chassis = reader
        .read_service_collection::<Chassis>(&context(), ServiceRootIdentifier::Chassis)
        .await
        .unwrap()
        .into_collection();

    for (_, enclosure) in &chassis {
        let resolution = enclosure.resolve_contained_chassis(&chassis);
        assert!(resolution.is_complete());
        assert!(resolution.resolved.is_empty());
    }
}
