// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service root (`/redfish/v1/`)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use super::decode::{link, optional_bounded, ODataLink};
use super::keyword::KeywordRegistry;
use super::resource::RedfishResource;
use super::resource_id::{kind, ResourceId};
use super::{ResourceName, UriPath};
use crate::errors::ValidationError;
use crate::locator::ServiceRootIdentifier;

/// Entry point of a Redfish service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRoot {
    id: ResourceId<kind::ServiceRoot>,
    path: UriPath,
    name: Option<ResourceName>,
    redfish_version: Option<String>,
    uuid: Option<String>,
    services: BTreeMap<String, UriPath>,
}

impl ServiceRoot {
    pub fn id(&self) -> ResourceId<kind::ServiceRoot> {
        self.id
    }

    pub fn path(&self) -> &UriPath {
        &self.path
    }

    pub fn name(&self) -> Option<&ResourceName> {
        self.name.as_ref()
    }

    pub fn redfish_version(&self) -> Option<&str> {
        self.redfish_version.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Link the service advertises for `service`, if any
    pub fn service(&self, service: ServiceRootIdentifier) -> Option<&UriPath> {
        self.services.get(&service.to_string())
    }

    /// Every advertised service keyed by its identifier name
    pub fn services(&self) -> impl Iterator<Item = (&str, &UriPath)> {
        self.services.iter().map(|(name, path)| (name.as_str(), path))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRootLinksDocument {
    pub sessions: Option<ODataLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRootDocument {
    pub name: Option<String>,
    pub redfish_version: Option<String>,
    #[serde(rename = "UUID")]
    pub uuid: Option<String>,
    pub links: Option<ServiceRootLinksDocument>,
    /// Service links live at the top level next to the scalar properties
    #[serde(flatten)]
    pub rest: HashMap<String, serde_json::Value>,
}

impl RedfishResource for ServiceRoot {
    type Kind = kind::ServiceRoot;
    type Document = ServiceRootDocument;

    fn from_document(
        path: &UriPath,
        mut document: ServiceRootDocument,
        _registry: &KeywordRegistry,
    ) -> Result<Self, ValidationError> {
        let mut services = BTreeMap::new();

        for service in ServiceRootIdentifier::ALL {
            let found = match service {
                ServiceRootIdentifier::ServiceRoot => continue,
                ServiceRootIdentifier::Sessions => document
                    .links
                    .take()
                    .unwrap_or_default()
                    .sessions,
                other => match document.rest.remove(&other.to_string()) {
                    Some(value) => match serde_json::from_value::<ODataLink>(value) {
                        Ok(found) => Some(found),
                        Err(error) => {
                            warn!(
                                service = %other,
                                %error,
                                "Skipping service link that is not an @odata.id reference"
                            );
                            None
                        }
                    },
                    None => None,
                },
            };
            if let Some(service_path) = link("ServiceRoot.Links", found)? {
                services.insert(service.to_string(), service_path);
            }
        }

        Ok(Self {
            id: ResourceId::next(),
            path: path.clone(),
            name: optional_bounded("Name", document.name)?,
            redfish_version: document.redfish_version,
            uuid: document.uuid,
            services,
        })
    }
}
