// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::models::DateFilter;
use crate::utils::parse_date;

/// Inclusive calendar-day range a date filter resolves to.
///
/// Bounds are whole days: record timestamps are compared by their date
/// portion only, so a record at 23:59 on the end day still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        let d = ts.date();
        d >= self.start && d <= self.end
    }
}

/// Resolve a date filter against `now`. `None` means no date restriction:
/// both for `DateFilter::None` and for a custom window that is unusable
/// (unparsable bound, or start after end) — bad input makes the dimension
/// inert, it never errors.
pub fn resolve_window(filter: &DateFilter, now: NaiveDateTime) -> Option<DateWindow> {
    let today = now.date();
    match filter {
        DateFilter::None => None,
        DateFilter::Today => Some(DateWindow {
            start: today,
            end: today,
        }),
        DateFilter::Week => {
            // Monday of the current week; Sunday counts as 6 days in, not 0.
            let back = (today.weekday().num_days_from_monday()) as u64;
            let monday = today.checked_sub_days(Days::new(back))?;
            // The window ends today, not on the coming Sunday.
            Some(DateWindow {
                start: monday,
                end: today,
            })
        }
        DateFilter::Month => {
            let start = today.with_day(1)?;
            Some(DateWindow {
                start,
                end: month_end(today.year(), today.month())?,
            })
        }
        DateFilter::Year => Some(DateWindow {
            start: NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
            end: NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
        }),
        DateFilter::Custom { start, end } => {
            let (start, end) = match (parse_date(start.trim()), parse_date(end.trim())) {
                (Ok(s), Ok(e)) => (s, e),
                _ => return None,
            };
            if start > end {
                return None;
            }
            Some(DateWindow { start, end })
        }
    }
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
