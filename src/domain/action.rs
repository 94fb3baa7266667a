// Copyright (c) 2025 - Cowboy AI, Inc.
//! Invocable Actions
//!
//! Redfish resources advertise operations under their `Actions` object:
//!
//! ```json
//! "Actions": {
//!     "#ComputerSystem.Reset": {
//!         "target": "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset",
//!         "ResetType@Redfish.AllowableValues": ["On", "ForceOff", "GracefulRestart"]
//!     }
//! }
//! ```
//!
//! Each entry becomes an [`ActionProperties`]: the action name, its invocation
//! target, and the allowable parameter values sorted alphabetically.

use serde::Serialize;
use std::cmp::Ordering;

use super::UriPath;

const ALLOWABLE_VALUES_SUFFIX: &str = "@Redfish.AllowableValues";

/// Invocable operation with a total order by name
///
/// Ordering and equality consider the action name only, so a list of actions
/// sorts the same way regardless of discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct ActionProperties {
    name: String,
    target: UriPath,
    parameter_values: Vec<String>,
}

impl ActionProperties {
    /// Create an action; `values` are sorted and then frozen
    pub fn new(name: impl Into<String>, target: UriPath, values: Vec<String>) -> Self {
        let mut parameter_values = values;
        parameter_values.sort();
        Self {
            name: name.into(),
            target,
            parameter_values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &UriPath {
        &self.target
    }

    /// Allowable parameter values in lexicographic order; empty when the
    /// action takes no parameters
    pub fn parameter_values(&self) -> &[String] {
        &self.parameter_values
    }

    /// Decode every action under a resource's `Actions` object
    ///
    /// Entries without a usable `target` are skipped and reported back to the
    /// caller as the raw action key. The returned actions are sorted.
    pub fn from_actions_object(
        actions: &serde_json::Map<String, serde_json::Value>,
    ) -> (Vec<ActionProperties>, Vec<String>) {
        let mut decoded = Vec::with_capacity(actions.len());
        let mut skipped = Vec::new();

        for (key, body) in actions {
            // "Oem" holds vendor actions nested one level deeper
            if key == "Oem" {
                continue;
            }
            let name = key.trim_start_matches('#');
            let target = body
                .get("target")
                .and_then(|value| value.as_str())
                .and_then(|value| UriPath::new(value).ok());
            let Some(target) = target else {
                skipped.push(key.clone());
                continue;
            };

            let mut values = Vec::new();
            if let Some(fields) = body.as_object() {
                for (field, allowable) in fields {
                    if !field.ends_with(ALLOWABLE_VALUES_SUFFIX) {
                        continue;
                    }
                    if let Some(items) = allowable.as_array() {
                        values.extend(
                            items
                                .iter()
                                .filter_map(|item| item.as_str())
                                .map(str::to_string),
                        );
                    }
                }
            }

            decoded.push(ActionProperties::new(name, target, values));
        }

        decoded.sort();
        (decoded, skipped)
    }
}

impl PartialEq for ActionProperties {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ActionProperties {}

impl PartialOrd for ActionProperties {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ActionProperties {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
