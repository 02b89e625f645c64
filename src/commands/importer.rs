// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::Record;
use crate::utils::{parse_decimal, parse_timestamp};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let out = m.get_one::<String>("out").unwrap();
    let records = read_csv_records(path)?;
    std::fs::write(out, serde_json::to_string_pretty(&records)?)
        .with_context(|| format!("Write {}", out))?;
    println!("Imported {} record(s) from {} to {}", records.len(), path, out);
    Ok(())
}

/// Read records from a CSV file with the canonical column order:
/// id,date,due_date,status,type,payment,amount,code,customer,device,description
pub fn read_csv_records(path: &str) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let id = rec.get(0).context("id missing")?.trim().to_string();
        let date_raw = rec.get(1).context("date missing")?.trim();
        let date = parse_timestamp(date_raw)
            .with_context(|| format!("Invalid date '{}' for record {}", date_raw, id))?;
        let due_date = match opt_field(&rec, 2) {
            Some(raw) => Some(
                parse_timestamp(&raw)
                    .with_context(|| format!("Invalid due date '{}' for record {}", raw, id))?,
            ),
            None => None,
        };
        let amount = match opt_field(&rec, 6) {
            Some(raw) => Some(
                parse_decimal(&raw)
                    .with_context(|| format!("Invalid amount '{}' for record {}", raw, id))?,
            ),
            None => None,
        };
        records.push(Record {
            id,
            date,
            due_date,
            status: opt_field(&rec, 3),
            doc_type: opt_field(&rec, 4),
            payment: opt_field(&rec, 5),
            amount,
            code: opt_field(&rec, 7),
            customer: opt_field(&rec, 8),
            device: opt_field(&rec, 9),
            description: opt_field(&rec, 10),
        });
    }
    Ok(records)
}

fn opt_field(rec: &csv::StringRecord, i: usize) -> Option<String> {
    rec.get(i)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
