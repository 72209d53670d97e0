// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for store and index consistency.
//!
//! Random add/update/delete sequences run against an [`IndexedStore`]; after
//! every step the trie-backed search must agree with a brute-force scan.

use proptest::prelude::*;
use std::collections::BTreeSet;

use super::test_utils::{email_strategy, name_strategy, phone_strategy};
use crate::error::StoreError;
use crate::store::{IndexedStore, Record, RecordUpdate};

#[derive(Debug, Clone)]
enum Op {
    Add(String, String, String),
    Update(String, RecordUpdate),
    Delete(String),
}

fn update_strategy() -> impl Strategy<Value = RecordUpdate> {
    (
        proptest::option::of(name_strategy()),
        proptest::option::of(email_strategy()),
        proptest::option::of(phone_strategy()),
    )
        .prop_map(|(name, email, phone)| RecordUpdate { name, email, phone })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (name_strategy(), email_strategy(), phone_strategy())
            .prop_map(|(name, email, phone)| Op::Add(name, email, phone)),
        2 => (phone_strategy(), update_strategy())
            .prop_map(|(phone, update)| Op::Update(phone, update)),
        1 => phone_strategy().prop_map(Op::Delete),
    ]
}

fn apply(store: &mut IndexedStore, op: Op) -> Result<(), StoreError> {
    match op {
        Op::Add(name, email, phone) => store.add_record(name, email, phone).map(|_| ()),
        Op::Update(phone, update) => store.update_record(&phone, update).map(|_| ()),
        Op::Delete(phone) => store.delete_record(&phone).map(|_| ()),
    }
}

fn substrings(text: &str) -> impl Iterator<Item = &str> {
    (0..text.len()).flat_map(move |start| (start + 1..=text.len()).map(move |end| &text[start..end]))
}

// Every non-empty substring of every indexed field, plus a few strings that
// cannot occur in generated data
fn probes(records: &[Record]) -> BTreeSet<String> {
    let mut probes: BTreeSet<String> = ["zz", "@@", "d", "a@a.net"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for record in records {
        for text in [record.name.to_lowercase(), record.email.to_lowercase()] {
            probes.extend(substrings(&text).map(str::to_string));
        }
    }
    probes
}

fn brute_force(records: &[Record], probe: &str) -> Vec<Record> {
    let probe = probe.to_lowercase();
    let mut hits: Vec<Record> = records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&probe)
                || record.email.to_lowercase().contains(&probe)
        })
        .cloned()
        .collect();
    hits.sort_by_key(|record| record.name.to_lowercase());
    hits
}

fn assert_consistent(store: &IndexedStore) -> Result<(), TestCaseError> {
    for probe in probes(store.records()) {
        prop_assert_eq!(
            store.search_substring(&probe),
            brute_force(store.records(), &probe),
            "probe {:?}",
            probe
        );
    }

    let (reachable, dead) = store.index().audit();
    prop_assert_eq!(dead, 0);
    prop_assert_eq!(reachable, store.index().node_count());
    prop_assert_eq!(store.index().is_empty(), store.is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: search agrees with a scan after every operation
    #[test]
    fn prop_search_matches_scan(ops in prop::collection::vec(op_strategy(), 1..25)) {
        let mut store = IndexedStore::new();
        for op in ops {
            let _ = apply(&mut store, op);
            assert_consistent(&store)?;
        }
    }

    // Property: removing every record leaves only the root behind
    #[test]
    fn prop_delete_all_empties_index(ops in prop::collection::vec(op_strategy(), 1..25)) {
        let mut store = IndexedStore::new();
        for op in ops {
            let _ = apply(&mut store, op);
        }

        let phones: Vec<String> = store.records().iter().map(|r| r.phone.clone()).collect();
        for phone in phones {
            store.delete_record(&phone).unwrap();
        }

        prop_assert!(store.index().is_empty());
        prop_assert_eq!(store.index().node_count(), 1);
    }

    // Property: a rejected update leaves records and index exactly as they were
    #[test]
    fn prop_failed_update_is_atomic(
        ops in prop::collection::vec(op_strategy(), 1..20),
        phone in phone_strategy(),
        update in update_strategy()
    ) {
        let mut store = IndexedStore::new();
        for op in ops {
            let _ = apply(&mut store, op);
        }

        let records_before = store.records().to_vec();
        let nodes_before = store.index().node_count();
        let results_before: Vec<Vec<Record>> = probes(&records_before)
            .iter()
            .map(|probe| store.search_substring(probe))
            .collect();

        if store.update_record(&phone, update).is_err() {
            prop_assert_eq!(store.records(), records_before.as_slice());
            prop_assert_eq!(store.index().node_count(), nodes_before);
            let results_after: Vec<Vec<Record>> = probes(&records_before)
                .iter()
                .map(|probe| store.search_substring(probe))
                .collect();
            prop_assert_eq!(results_after, results_before);
        } else {
            assert_consistent(&store)?;
        }
    }
}
