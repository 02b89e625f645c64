// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;

use crate::models::{Category, Record};

/// Facts derived from a record that the backend does not supply directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub completed: bool,
    pub overdue: bool,
}

/// Classify a record against the entity's terminal status.
///
/// A record is completed iff its status equals the terminal value. It is
/// overdue iff it has a due date in the past and is not completed; a record
/// without a due date is never overdue. The backend's status string stays
/// authoritative — only the overdue flag is computed here.
pub fn classify(record: &Record, terminal_status: &str, now: NaiveDateTime) -> Classification {
    let completed = record.status.as_deref() == Some(terminal_status);
    let overdue = !completed && record.due_date.is_some_and(|due| due < now);
    Classification { completed, overdue }
}

impl Category {
    /// New = neither overdue nor completed.
    pub fn matches(&self, c: Classification) -> bool {
        match self {
            Category::New => !c.overdue && !c.completed,
            Category::Overdue => c.overdue,
            Category::Completed => c.completed,
        }
    }
}
