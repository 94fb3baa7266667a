// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Value Objects
//!
//! Bounded strings, composite readings, keyword tables, URI paths and action
//! ordering.

use proptest::prelude::*;

use cim_redfish::domain::{
    ActionProperties, BootSource, BoundedString, BoundedStringError, CompositeNumericReading,
    KeywordLookup, KeywordRegistry, PowerState, ProtocolEnum, SystemType, UriPath,
};

fn all_keywords() -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = Vec::new();
    keywords.extend(BootSource::VARIANTS.iter().map(|v| v.keyword()));
    keywords.extend(PowerState::VARIANTS.iter().map(|v| v.keyword()));
    keywords.extend(SystemType::VARIANTS.iter().map(|v| v.keyword()));
    keywords
}

proptest! {
    /// Construction succeeds iff the character count is within the bound
    #[test]
    fn prop_bounded_string_enforces_bound(value in "\\PC{0,100}") {
        let length = value.chars().count();
        let result = BoundedString::<64>::new(value.clone());
        if length <= 64 {
            let bounded = result.unwrap();
            prop_assert_eq!(bounded.as_str(), value.as_str());
        } else {
            prop_assert_eq!(result, Err(BoundedStringError::TooLong { max: 64, actual: length }));
        }
    }

    /// Exactly at the bound always succeeds, one past always fails
    #[test]
    fn prop_bounded_string_boundary(ch in any::<char>()) {
        let at_bound: String = std::iter::repeat(ch).take(32).collect();
        let past_bound: String = std::iter::repeat(ch).take(33).collect();
        prop_assert!(BoundedString::<32>::new(at_bound).is_ok());
        prop_assert!(BoundedString::<32>::new(past_bound).is_err());
    }

    /// Fails iff either component is negative
    #[test]
    fn prop_reading_non_negative(major in any::<i64>(), minor in any::<i64>()) {
        let result = CompositeNumericReading::new(major, minor);
        prop_assert_eq!(result.is_err(), major < 0 || minor < 0);
        if let Ok(reading) = result {
            prop_assert_eq!(reading.major(), major as u64);
            prop_assert_eq!(reading.minor(), minor as u64);
        }
    }

    /// Decimal readings keep one place and never go negative
    #[test]
    fn prop_reading_from_decimal(value in 0.0f64..1_000_000.0) {
        let reading = CompositeNumericReading::from_decimal(value).unwrap();
        prop_assert!(reading.minor() < 10);
        let rebuilt = reading.major() as f64 + reading.minor() as f64 / 10.0;
        prop_assert!((rebuilt - value).abs() <= 0.05 + 1e-9);
    }

    /// Any string that is not a known keyword comes back as the unknown sentinel
    #[test]
    fn prop_unknown_keyword_is_sentinel(keyword in "[A-Za-z]{1,16}") {
        prop_assume!(!all_keywords().iter().any(|known| *known == keyword));
        let registry = KeywordRegistry::new().unwrap();
        prop_assert_eq!(
            registry.lookup::<BootSource>(&keyword),
            KeywordLookup::Unknown(keyword.clone())
        );
        prop_assert_eq!(
            registry.lookup::<PowerState>(&keyword),
            KeywordLookup::Unknown(keyword.clone())
        );
    }

    /// Normalization is idempotent
    #[test]
    fn prop_uri_path_normalization_idempotent(
        segments in prop::collection::vec("[A-Za-z0-9_.-]{1,12}", 0..6),
        trailing in any::<bool>(),
        doubled in any::<bool>(),
    ) {
        let separator = if doubled { "//" } else { "/" };
        let mut raw = format!("/redfish/v1{}{}", separator, segments.join(separator));
        if trailing {
            raw.push('/');
        }
        let once = UriPath::new(&raw).unwrap();
        let twice = UriPath::new(once.as_str()).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.as_str().contains("//"));
    }

    /// Actions sort by name regardless of input order; parameter values are sorted
    #[test]
    fn prop_action_ordering(
        names in prop::collection::hash_set("[A-Z][a-z]{2,10}", 1..8),
        values in prop::collection::vec("[A-Za-z]{1,8}", 0..6),
        seed in any::<u64>(),
    ) {
        let target = UriPath::new("/redfish/v1/Systems/1/Actions/x").unwrap();
        let mut actions: Vec<ActionProperties> = names
            .iter()
            .map(|name| ActionProperties::new(name.clone(), target.clone(), values.clone()))
            .collect();
        // Deterministic shuffle
        let len = actions.len();
        for i in 0..len {
            let j = ((seed >> (i % 64)) as usize + i) % len;
            actions.swap(i, j);
        }
        actions.sort();

        let mut expected: Vec<String> = names.into_iter().collect();
        expected.sort();
        let sorted: Vec<String> = actions.iter().map(|a| a.name().to_string()).collect();
        prop_assert_eq!(sorted, expected);

        let mut sorted_values = values.clone();
        sorted_values.sort();
        for action in &actions {
            prop_assert_eq!(action.parameter_values(), sorted_values.as_slice());
        }
    }
}

#[test]
fn test_every_variant_round_trips() {
    let registry = KeywordRegistry::new().unwrap();
    for variant in SystemType::VARIANTS {
        assert_eq!(registry.lookup::<SystemType>(variant.keyword()), KeywordLookup::Known(*variant));
    }
    for variant in BootSource::VARIANTS {
        assert_eq!(registry.lookup::<BootSource>(variant.keyword()), KeywordLookup::Known(*variant));
    }
}

#[test]
fn test_reset_sorts_after_power_on() {
    let target = UriPath::new("/redfish/v1/Systems/1/Actions/x").unwrap();
    let mut actions = vec![
        ActionProperties::new("Reset", target.clone(), vec!["On".into(), "ForceOff".into()]),
        ActionProperties::new("PowerOn", target, vec![]),
    ];
    actions.sort();
    assert_eq!(actions[0].name(), "PowerOn");
    assert_eq!(actions[1].name(), "Reset");
    assert_eq!(actions[1].parameter_values(), &["ForceOff".to_string(), "On".to_string()]);
}
