// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Record, StatEntry, Stats};

const NO_STATUS: &str = "Senza stato";
const NO_TYPE: &str = "Senza tipo";
const NO_PAYMENT: &str = "Senza pagamento";

/// Roll up an already-filtered record set in a single pass.
///
/// Breakdown labels mirror the backend's vocabulary verbatim (placeholder for
/// absent fields), so every record lands in exactly one bucket per dimension
/// and bucket counts always sum back to `total`.
pub fn aggregate(records: &[Record]) -> Stats {
    let mut total_amount = Decimal::ZERO;
    let mut by_status = Breakdown::new(NO_STATUS);
    let mut by_type = Breakdown::new(NO_TYPE);
    let mut by_payment = Breakdown::new(NO_PAYMENT);

    for r in records {
        let amount = r.amount.unwrap_or(Decimal::ZERO);
        total_amount += amount;
        by_status.add(r.status.as_deref(), amount);
        by_type.add(r.doc_type.as_deref(), amount);
        by_payment.add(r.payment.as_deref(), amount);
    }

    Stats {
        total: records.len(),
        total_amount,
        by_status: by_status.into_sorted(),
        by_type: by_type.into_sorted(),
        by_payment: by_payment.into_sorted(),
    }
}

/// Count/sum accumulator for one grouping dimension. Entries live in a Vec in
/// first-seen order with a label index on the side, so the final stable sort
/// by descending count leaves ties in input order.
struct Breakdown {
    placeholder: &'static str,
    entries: Vec<StatEntry>,
    index: HashMap<String, usize>,
}

impl Breakdown {
    fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, label: Option<&str>, amount: Decimal) {
        let label = label.unwrap_or(self.placeholder);
        let i = match self.index.get(label) {
            Some(&i) => i,
            None => {
                self.entries.push(StatEntry {
                    label: label.to_string(),
                    count: 0,
                    amount: Decimal::ZERO,
                });
                let i = self.entries.len() - 1;
                self.index.insert(label.to_string(), i);
                i
            }
        };
        self.entries[i].count += 1;
        self.entries[i].amount += amount;
    }

    fn into_sorted(mut self) -> Vec<StatEntry> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries
    }
}
