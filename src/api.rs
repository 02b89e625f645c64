// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use crate::models::{EntityKind, Record};

const UA: &str = concat!(
    "officina/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/officinalabs/officina)"
);

/// Tenant scoping for every backend call. Passed explicitly — nothing in the
/// crate reads ambient session state.
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub base_url: String,
    pub tenant_id: String,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Payload is not a record collection (expected array, {{\"items\": [...]}}, or a single record object)")]
    NotACollection,

    #[error("Record at index {index} is malformed: {reason}")]
    BadRecord { index: usize, reason: String },
}

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Fetch one entity collection for the tenant. Retries belong to callers;
/// this does a single GET and normalizes whatever envelope comes back.
pub fn fetch_records(ctx: &TenantContext, entity: EntityKind) -> Result<Vec<Record>> {
    let url = format!("{}/{}", ctx.base_url.trim_end_matches('/'), entity.path());
    let client = http_client()?;
    let payload: Value = client
        .get(&url)
        .bearer_auth(&ctx.token)
        .header("X-Tenant-Id", &ctx.tenant_id)
        .send()
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("GET {}", url))?
        .json()
        .with_context(|| format!("Decode response from {}", url))?;
    let records = normalize_payload(payload).with_context(|| format!("Normalize {}", url))?;
    Ok(records)
}

/// Normalize the backend's inconsistent response shapes into a record list.
///
/// Accepted: a bare JSON array, an `{ "items": [...] }` envelope, or a single
/// record object (wrapped into a one-element list). Anything else is a caller
/// bug upstream and fails fast instead of quietly yielding zero records.
pub fn normalize_payload(payload: Value) -> Result<Vec<Record>, PayloadError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("items") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(PayloadError::NotACollection),
            None => vec![Value::Object(obj)],
        },
        _ => return Err(PayloadError::NotACollection),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| PayloadError::BadRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
