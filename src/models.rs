// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One business record subject to search, filtering, and aggregation.
///
/// The concrete entities (invoice, quotation, sale, booking) all map onto this
/// shape: `date` drives date-window filtering, `due_date` only feeds the
/// overdue classification, and the string vocabularies (`status`, `doc_type`,
/// `payment`) are owned by the backend and mirrored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    #[serde(default, with = "timestamp_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub payment: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record {
    /// The fields the free-text clause searches.
    pub fn searchable_fields(&self) -> [Option<&str>; 4] {
        [
            self.code.as_deref(),
            self.customer.as_deref(),
            self.device.as_deref(),
            self.description.as_deref(),
        ]
    }
}

/// The four record collections the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Invoices,
    Quotations,
    Sales,
    Bookings,
}

impl EntityKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invoices" => Some(Self::Invoices),
            "quotations" => Some(Self::Quotations),
            "sales" => Some(Self::Sales),
            "bookings" => Some(Self::Bookings),
            _ => None,
        }
    }

    /// API path segment for the entity's collection endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Quotations => "quotations",
            Self::Sales => "sales",
            Self::Bookings => "bookings",
        }
    }

    /// The status value meaning "successfully completed" for this entity.
    /// Drives the overdue/completed classification.
    pub fn terminal_status(&self) -> &'static str {
        match self {
            Self::Invoices => "Pagato",
            Self::Quotations => "Accettato",
            Self::Sales => "Completata",
            Self::Bookings => "Completata",
        }
    }
}

/// Relative-or-custom date window selector.
///
/// Custom bounds are kept as raw strings: a malformed bound must leave the
/// date dimension inert rather than fail the whole search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    None,
    Today,
    Week,
    Month,
    Year,
    Custom {
        start: String,
        end: String,
    },
}

/// Derived record category (computed, not a backend field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    New,
    Overdue,
    Completed,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" | "nuove" => Some(Self::New),
            "overdue" | "scadute" => Some(Self::Overdue),
            "completed" | "completate" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// The active search criteria. `Default` matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub query: String,
    pub status: Option<String>,
    pub doc_type: Option<String>,
    pub category: Option<Category>,
    pub date: DateFilter,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

/// One row of a grouped breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub count: usize,
    pub amount: Decimal,
}

/// Rollup statistics over a filtered record set.
///
/// Breakdown entries are ordered by descending count; equal counts keep the
/// order labels were first seen in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub total_amount: Decimal,
    pub by_status: Vec<StatEntry>,
    pub by_type: Vec<StatEntry>,
    pub by_payment: Vec<StatEntry>,
}

impl Stats {
    pub fn empty() -> Self {
        Self {
            total: 0,
            total_amount: Decimal::ZERO,
            by_status: Vec::new(),
            by_type: Vec::new(),
            by_payment: Vec::new(),
        }
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        crate::utils::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

mod timestamp_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw {
            Some(s) if !s.trim().is_empty() => crate::utils::parse_timestamp(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
