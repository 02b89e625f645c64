// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::engine::aggregate::aggregate;
use crate::engine::predicate::Predicate;
use crate::models::{EntityKind, FilterState, Record, Stats};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub filtered: Vec<Record>,
    pub stats: Stats,
}

/// Run the full search: compile the filter state, keep matching records in
/// input order, roll up statistics over the matches.
///
/// Deterministic: identical inputs yield identical output, `now` is the only
/// clock, and `records` is never mutated. An empty input yields an empty
/// result with zeroed stats.
pub fn search(
    records: &[Record],
    state: &FilterState,
    entity: EntityKind,
    now: NaiveDateTime,
) -> SearchOutcome {
    if records.is_empty() {
        return SearchOutcome {
            filtered: Vec::new(),
            stats: Stats::empty(),
        };
    }
    let predicate = Predicate::build(state, entity.terminal_status(), now);
    let filtered: Vec<Record> = records
        .iter()
        .filter(|r| predicate.matches(r))
        .cloned()
        .collect();
    let stats = aggregate(&filtered);
    SearchOutcome { filtered, stats }
}
