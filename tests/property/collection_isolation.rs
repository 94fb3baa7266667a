// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Collection Isolation
//!
//! For any mix of good, missing, malformed and invalid links the collection
//! holds exactly the good ones and every other link is reported once.

use proptest::prelude::*;
use serde_json::json;

use cim_redfish::adapters::InMemoryFetcher;
use cim_redfish::domain::{ComputerSystem, UriPath};
use cim_redfish::TransportError;

use crate::fixtures::{collection_reader, computer_system, context, CHASSIS_1U};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkState {
    Good,
    NotFound,
    Unreachable,
    Malformed,
    Invalid,
}

fn link_state() -> impl Strategy<Value = LinkState> {
    prop_oneof![
        3 => Just(LinkState::Good),
        1 => Just(LinkState::NotFound),
        1 => Just(LinkState::Unreachable),
        1 => Just(LinkState::Malformed),
        1 => Just(LinkState::Invalid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bad_links_never_fail_the_collection(
        states in prop::collection::vec(link_state(), 0..24),
        max_concurrency in 1usize..6,
    ) {
        let mut fetcher = InMemoryFetcher::new();
        let mut paths = Vec::with_capacity(states.len());
        for (index, state) in states.iter().enumerate() {
            let path = format!("/redfish/v1/Systems/{}", index);
            fetcher = match state {
                LinkState::Good => fetcher.with_json(&path, computer_system(&index.to_string(), CHASSIS_1U)),
                LinkState::NotFound => fetcher,
                LinkState::Unreachable => fetcher.with_failure(&path, TransportError::Unreachable("reset".into())),
                LinkState::Malformed => fetcher.with_body(&path, 200, "<html>"),
                LinkState::Invalid => fetcher.with_json(&path, json!({"SystemType": "Toaster"})),
            };
            paths.push(UriPath::new(&path).unwrap());
        }

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let outcome = runtime
            .block_on(
                collection_reader(fetcher).read_collection::<ComputerSystem>(
                    &context().with_max_concurrency(max_concurrency),
                    paths.clone(),
                ),
            )
            .unwrap();

        let good = states.iter().filter(|s| **s == LinkState::Good).count();
        prop_assert_eq!(outcome.collection().len(), good);
        prop_assert_eq!(outcome.failures().len(), states.len() - good);

        for (path, state) in paths.iter().zip(&states) {
            let in_collection = outcome.collection().contains(path);
            let reported = outcome.failures().iter().filter(|f| &f.path == path).count();
            prop_assert_eq!(in_collection, *state == LinkState::Good);
            prop_assert_eq!(reported, usize::from(*state != LinkState::Good));
        }
    }
}
