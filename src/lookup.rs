// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use crate::categories::{Country, Operation, COUNTRIES, OPERATIONS};
use crate::record_store::RecordStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupReport {
    pub findings: Vec<(Operation, Vec<Country>)>,
}

impl LookupReport {
    pub fn operations_found(&self) -> Vec<Operation> {
        self.findings
            .iter()
            .filter(|(_, countries)| !countries.is_empty())
            .map(|(operation, _)| *operation)
            .collect()
    }
}

// Exact, case-sensitive string equality against the trimmed file contents;
// no normalization of the IP representation.
pub fn check_ip(store: &dyn RecordStore, target_ip: &str) -> LookupReport {
    let findings = OPERATIONS
        .iter()
        .map(|operation| {
            let countries = COUNTRIES
                .iter()
                .filter(|country| {
                    store
                        .load_ips(*operation, **country)
                        .iter()
                        .any(|candidate| candidate == target_ip)
                })
                .copied()
                .collect::<Vec<Country>>();
            (*operation, countries)
        })
        .collect::<Vec<(Operation, Vec<Country>)>>();
    LookupReport { findings }
}
