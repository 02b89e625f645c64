// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::Local;

use crate::commands::importer::read_csv_records;
use crate::engine::search;
use crate::models::{Category, DateFilter, EntityKind, FilterState, Record, StatEntry};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use crate::{api, config};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let entity = entity_from_matches(m)?;
    let records = match m.get_one::<String>("input") {
        Some(path) => load_records_from_file(path)?,
        None => api::fetch_records(&config::tenant_context()?, entity)?,
    };
    let state = filter_state_from_matches(m)?;
    let now = Local::now().naive_local();
    let outcome = search(&records, &state, entity, now);

    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &outcome)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = outcome
        .filtered
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.date.format("%Y-%m-%d").to_string(),
                r.status.clone().unwrap_or_default(),
                r.doc_type.clone().unwrap_or_default(),
                r.amount.map(|a| fmt_money(&a)).unwrap_or_default(),
                r.customer.clone().unwrap_or_default(),
                r.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Status", "Type", "Amount", "Customer", "Description"],
            rows,
        )
    );
    println!(
        "{} record(s), total {}",
        outcome.stats.total,
        fmt_money(&outcome.stats.total_amount)
    );

    if m.get_flag("stats") {
        print_breakdown("Status", &outcome.stats.by_status, outcome.stats.total);
        print_breakdown("Type", &outcome.stats.by_type, outcome.stats.total);
        print_breakdown("Payment", &outcome.stats.by_payment, outcome.stats.total);
    }
    Ok(())
}

fn print_breakdown(dimension: &str, entries: &[StatEntry], total: usize) {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let pct = if total == 0 {
                0.0
            } else {
                e.count as f64 * 100.0 / total as f64
            };
            vec![
                e.label.clone(),
                e.count.to_string(),
                fmt_money(&e.amount),
                format!("{:.1}%", pct),
            ]
        })
        .collect();
    println!("{}", pretty_table(&[dimension, "Count", "Amount", "Share"], rows));
}

pub fn entity_from_matches(m: &clap::ArgMatches) -> Result<EntityKind> {
    let raw = m.get_one::<String>("entity").unwrap();
    EntityKind::parse(raw).ok_or_else(|| anyhow!("Unknown entity '{}'", raw))
}

/// Build the engine filter state from CLI flags. `--from`/`--to` imply a
/// custom window and win over `--date`; `--date custom` with missing bounds
/// stays inert by design.
pub fn filter_state_from_matches(m: &clap::ArgMatches) -> Result<FilterState> {
    let from = m.get_one::<String>("from");
    let to = m.get_one::<String>("to");
    let date = if from.is_some() || to.is_some() {
        DateFilter::Custom {
            start: from.cloned().unwrap_or_default(),
            end: to.cloned().unwrap_or_default(),
        }
    } else {
        match m.get_one::<String>("date").map(String::as_str) {
            Some("today") => DateFilter::Today,
            Some("week") => DateFilter::Week,
            Some("month") => DateFilter::Month,
            Some("year") => DateFilter::Year,
            Some("custom") => DateFilter::Custom {
                start: String::new(),
                end: String::new(),
            },
            _ => DateFilter::None,
        }
    };
    let category = match m.get_one::<String>("category") {
        Some(raw) => Some(Category::parse(raw).ok_or_else(|| anyhow!("Unknown category '{}'", raw))?),
        None => None,
    };
    let min_amount = m
        .get_one::<String>("min-amount")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let max_amount = m
        .get_one::<String>("max-amount")
        .map(|s| parse_decimal(s))
        .transpose()?;
    Ok(FilterState {
        query: m.get_one::<String>("query").cloned().unwrap_or_default(),
        status: m.get_one::<String>("status").cloned(),
        doc_type: m.get_one::<String>("type").cloned(),
        category,
        date,
        min_amount,
        max_amount,
    })
}

/// Load records from a local file, dispatching on extension. JSON files go
/// through the same payload normalization as backend responses.
pub fn load_records_from_file(path: &str) -> Result<Vec<Record>> {
    let is_csv = Path::new(path)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        return read_csv_records(path);
    }
    let raw = std::fs::read_to_string(path).with_context(|| format!("Read {}", path))?;
    let payload = serde_json::from_str(&raw).with_context(|| format!("Parse JSON in {}", path))?;
    let records = api::normalize_payload(payload).with_context(|| format!("Normalize {}", path))?;
    Ok(records)
}
