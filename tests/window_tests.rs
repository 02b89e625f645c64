// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use officina::engine::resolve_window;
use officina::models::DateFilter;

fn ts(s: &str) -> NaiveDateTime {
    officina::utils::parse_timestamp(s).unwrap()
}

fn d(s: &str) -> NaiveDate {
    officina::utils::parse_date(s).unwrap()
}

#[test]
fn none_means_no_restriction() {
    assert_eq!(resolve_window(&DateFilter::None, ts("2025-06-15T10:00:00")), None);
}

#[test]
fn today_covers_the_full_day() {
    let w = resolve_window(&DateFilter::Today, ts("2025-06-15T10:00:00")).unwrap();
    assert_eq!(w.start, d("2025-06-15"));
    assert_eq!(w.end, d("2025-06-15"));
    // Date-portion comparison: late-evening record on the end day matches.
    assert!(w.contains(ts("2025-06-15T23:58:00")));
    assert!(!w.contains(ts("2025-06-14T23:59:59")));
    assert!(!w.contains(ts("2025-06-16T00:00:00")));
}

#[test]
fn week_runs_monday_through_today() {
    // 2025-06-18 is a Wednesday; Monday of that week is 2025-06-16.
    let w = resolve_window(&DateFilter::Week, ts("2025-06-18T12:00:00")).unwrap();
    assert_eq!(w.start, d("2025-06-16"));
    assert_eq!(w.end, d("2025-06-18"));
    // The upcoming Saturday sits in the same calendar week but past the end bound.
    assert!(!w.contains(ts("2025-06-21T09:00:00")));
    assert!(w.contains(ts("2025-06-16T00:00:00")));
}

#[test]
fn week_on_sunday_reaches_back_six_days() {
    // 2025-06-22 is a Sunday; its Monday is 2025-06-16, not the 22nd.
    let w = resolve_window(&DateFilter::Week, ts("2025-06-22T08:00:00")).unwrap();
    assert_eq!(w.start, d("2025-06-16"));
    assert_eq!(w.end, d("2025-06-22"));
}

#[test]
fn week_on_monday_is_a_single_day() {
    let w = resolve_window(&DateFilter::Week, ts("2025-06-16T08:00:00")).unwrap();
    assert_eq!(w.start, d("2025-06-16"));
    assert_eq!(w.end, d("2025-06-16"));
}

#[test]
fn month_covers_whole_calendar_month() {
    let w = resolve_window(&DateFilter::Month, ts("2025-06-15T10:00:00")).unwrap();
    assert_eq!(w.start, d("2025-06-01"));
    assert_eq!(w.end, d("2025-06-30"));
}

#[test]
fn month_handles_leap_february_and_december() {
    let feb = resolve_window(&DateFilter::Month, ts("2024-02-10T00:00:00")).unwrap();
    assert_eq!(feb.end, d("2024-02-29"));
    let dec = resolve_window(&DateFilter::Month, ts("2025-12-05T00:00:00")).unwrap();
    assert_eq!(dec.start, d("2025-12-01"));
    assert_eq!(dec.end, d("2025-12-31"));
}

#[test]
fn year_covers_whole_calendar_year() {
    let w = resolve_window(&DateFilter::Year, ts("2025-06-15T10:00:00")).unwrap();
    assert_eq!(w.start, d("2025-01-01"));
    assert_eq!(w.end, d("2025-12-31"));
}

#[test]
fn custom_uses_both_bounds_inclusive() {
    let f = DateFilter::Custom {
        start: "2025-03-01".into(),
        end: "2025-03-31".into(),
    };
    let w = resolve_window(&f, ts("2025-06-15T10:00:00")).unwrap();
    assert!(w.contains(ts("2025-03-01T00:00:00")));
    assert!(w.contains(ts("2025-03-31T23:59:00")));
    assert!(!w.contains(ts("2025-04-01T00:00:00")));
}

#[test]
fn custom_tolerates_surrounding_whitespace() {
    let f = DateFilter::Custom {
        start: " 2025-03-01 ".into(),
        end: " 2025-03-02".into(),
    };
    assert!(resolve_window(&f, ts("2025-06-15T10:00:00")).is_some());
}

#[test]
fn degenerate_custom_windows_are_inert() {
    let now = ts("2025-06-15T10:00:00");
    let reversed = DateFilter::Custom {
        start: "2025-03-31".into(),
        end: "2025-03-01".into(),
    };
    assert_eq!(resolve_window(&reversed, now), None);
    let unparsable = DateFilter::Custom {
        start: "not-a-date".into(),
        end: "2025-03-31".into(),
    };
    assert_eq!(resolve_window(&unparsable, now), None);
    let half_empty = DateFilter::Custom {
        start: "2025-03-01".into(),
        end: String::new(),
    };
    assert_eq!(resolve_window(&half_empty, now), None);
}
