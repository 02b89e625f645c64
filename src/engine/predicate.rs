// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::engine::classify::classify;
use crate::engine::window::{DateWindow, resolve_window};
use crate::models::{Category, FilterState, Record};

/// A filter state compiled against a reference instant.
///
/// Building resolves the date window once and lowercases the text query once;
/// `matches` is then a pure conjunction over one record. A dimension left
/// empty in the filter state is simply absent here and vacuously true.
#[derive(Debug, Clone)]
pub struct Predicate {
    query: Option<String>,
    status: Option<String>,
    doc_type: Option<String>,
    category: Option<Category>,
    window: Option<DateWindow>,
    min_amount: Option<Decimal>,
    max_amount: Option<Decimal>,
    terminal_status: String,
    now: NaiveDateTime,
}

impl Predicate {
    pub fn build(state: &FilterState, terminal_status: &str, now: NaiveDateTime) -> Self {
        let query = {
            let q = state.query.trim().to_lowercase();
            if q.is_empty() { None } else { Some(q) }
        };
        Self {
            query,
            status: state.status.clone().filter(|s| !s.is_empty()),
            doc_type: state.doc_type.clone().filter(|s| !s.is_empty()),
            category: state.category,
            window: resolve_window(&state.date, now),
            min_amount: state.min_amount,
            max_amount: state.max_amount,
            terminal_status: terminal_status.to_string(),
            now,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        if let Some(cat) = self.category {
            let c = classify(record, &self.terminal_status, self.now);
            if !cat.matches(c) {
                return false;
            }
        }
        if let Some(status) = &self.status {
            // Exact, case-sensitive: the vocabulary is closed and backend-owned.
            if record.status.as_deref() != Some(status.as_str()) {
                return false;
            }
        }
        if let Some(doc_type) = &self.doc_type {
            if record.doc_type.as_deref() != Some(doc_type.as_str()) {
                return false;
            }
        }
        let amount = record.amount.unwrap_or(Decimal::ZERO);
        if self.min_amount.is_some_and(|min| amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| amount > max) {
            return false;
        }
        if let Some(q) = &self.query {
            let hit = record
                .searchable_fields()
                .into_iter()
                .flatten()
                .any(|f| f.to_lowercase().contains(q.as_str()));
            if !hit {
                return false;
            }
        }
        if let Some(window) = &self.window {
            if !window.contains(record.date) {
                return false;
            }
        }
        true
    }
}
