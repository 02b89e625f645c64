// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use officina::engine::search;
use officina::models::{DateFilter, EntityKind, FilterState, Record, Stats};
use rust_decimal::Decimal;

fn ts(s: &str) -> NaiveDateTime {
    officina::utils::parse_timestamp(s).unwrap()
}

fn rec(id: &str, date: &str) -> Record {
    Record {
        id: id.into(),
        date: ts(date),
        due_date: None,
        status: None,
        doc_type: None,
        payment: None,
        amount: None,
        code: None,
        customer: None,
        device: None,
        description: None,
    }
}

fn invoices() -> Vec<Record> {
    let mut a = rec("1", "2025-06-15T23:58:00");
    a.status = Some("Pagato".into());
    a.amount = Some(Decimal::from(100));
    a.description = Some("iPhone 14 Pro".into());
    let mut b = rec("2", "2025-06-14T23:59:59");
    b.status = Some("Non pagato".into());
    b.amount = Some(Decimal::from(50));
    b.description = Some("Samsung S23".into());
    let mut c = rec("3", "2025-06-10T09:00:00");
    c.status = Some("Pagato".into());
    vec![a, b, c]
}

#[test]
fn filtered_is_a_subset_in_input_order() {
    let records = invoices();
    let out = search(&records, &FilterState::default(), EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    assert_eq!(out.filtered, records);
    assert_eq!(out.stats.total, out.filtered.len());
}

#[test]
fn search_is_deterministic() {
    let records = invoices();
    let state = FilterState {
        status: Some("Pagato".into()),
        ..Default::default()
    };
    let now = ts("2025-06-15T10:00:00");
    let first = search(&records, &state, EntityKind::Invoices, now);
    let second = search(&records, &state, EntityKind::Invoices, now);
    assert_eq!(first, second);
}

#[test]
fn search_never_mutates_its_input() {
    let records = invoices();
    let before = records.clone();
    let _ = search(&records, &FilterState::default(), EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    assert_eq!(records, before);
}

#[test]
fn today_filter_compares_date_portions_only() {
    let records = invoices();
    let state = FilterState {
        date: DateFilter::Today,
        ..Default::default()
    };
    let out = search(&records, &state, EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    // 23:58 on the 15th is in; 23:59:59 on the 14th is out.
    assert_eq!(out.filtered.len(), 1);
    assert_eq!(out.filtered[0].id, "1");
}

#[test]
fn week_filter_excludes_the_rest_of_the_calendar_week() {
    // now is Wednesday 2025-06-18; Saturday the 21st is still this calendar
    // week but past the window end.
    let monday = rec("mon", "2025-06-16T08:00:00");
    let saturday = rec("sat", "2025-06-21T08:00:00");
    let state = FilterState {
        date: DateFilter::Week,
        ..Default::default()
    };
    let out = search(
        &[monday, saturday],
        &state,
        EntityKind::Invoices,
        ts("2025-06-18T12:00:00"),
    );
    assert_eq!(out.filtered.len(), 1);
    assert_eq!(out.filtered[0].id, "mon");
}

#[test]
fn text_query_matches_case_insensitively() {
    let records = invoices();
    let state = FilterState {
        query: "iph".into(),
        ..Default::default()
    };
    let out = search(&records, &state, EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    assert_eq!(out.filtered.len(), 1);
    assert_eq!(out.filtered[0].description.as_deref(), Some("iPhone 14 Pro"));
}

#[test]
fn status_filter_and_breakdown_agree() {
    let records = invoices();
    let state = FilterState {
        status: Some("Pagato".into()),
        ..Default::default()
    };
    let out = search(&records, &state, EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    assert_eq!(out.filtered.len(), 2);
    assert_eq!(out.stats.by_status[0].label, "Pagato");
    assert_eq!(out.stats.by_status[0].count, 2);
    let bucket_sum: usize = out.stats.by_status.iter().map(|e| e.count).sum();
    assert_eq!(bucket_sum, out.stats.total);
}

#[test]
fn empty_input_yields_zeroed_stats() {
    let out = search(&[], &FilterState::default(), EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    assert!(out.filtered.is_empty());
    assert_eq!(out.stats, Stats::empty());
}

#[test]
fn widening_a_custom_window_never_drops_records() {
    let records = invoices();
    let now = ts("2025-06-15T10:00:00");
    let narrow = FilterState {
        date: DateFilter::Custom {
            start: "2025-06-14".into(),
            end: "2025-06-15".into(),
        },
        ..Default::default()
    };
    let wide = FilterState {
        date: DateFilter::Custom {
            start: "2025-06-01".into(),
            end: "2025-06-30".into(),
        },
        ..Default::default()
    };
    let narrow_out = search(&records, &narrow, EntityKind::Invoices, now);
    let wide_out = search(&records, &wide, EntityKind::Invoices, now);
    for r in &narrow_out.filtered {
        assert!(wide_out.filtered.contains(r));
    }
    assert!(wide_out.filtered.len() >= narrow_out.filtered.len());
}

#[test]
fn malformed_custom_window_degrades_to_no_restriction() {
    let records = invoices();
    let state = FilterState {
        date: DateFilter::Custom {
            start: "2025-06-30".into(),
            end: "2025-06-01".into(),
        },
        ..Default::default()
    };
    let out = search(&records, &state, EntityKind::Invoices, ts("2025-06-15T10:00:00"));
    assert_eq!(out.filtered.len(), records.len());
}

#[test]
fn category_filter_uses_entity_terminal_status() {
    let now = ts("2025-06-15T10:00:00");
    let mut overdue = rec("late", "2025-05-01");
    overdue.status = Some("Non pagato".into());
    overdue.due_date = Some(ts("2025-06-01"));
    let mut done = rec("done", "2025-05-02");
    done.status = Some("Pagato".into());
    done.due_date = Some(ts("2025-06-01"));
    let fresh = rec("fresh", "2025-06-14");

    let records = vec![overdue, done, fresh];
    let state = FilterState {
        category: Some(officina::models::Category::Overdue),
        ..Default::default()
    };
    let out = search(&records, &state, EntityKind::Invoices, now);
    assert_eq!(out.filtered.len(), 1);
    assert_eq!(out.filtered[0].id, "late");

    let state = FilterState {
        category: Some(officina::models::Category::New),
        ..Default::default()
    };
    let out = search(&records, &state, EntityKind::Invoices, now);
    assert_eq!(out.filtered.len(), 1);
    assert_eq!(out.filtered[0].id, "fresh");
}
