// Copyright (c) Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::commands::search::load_records_from_file;
use crate::models::Record;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let input = m.get_one::<String>("input").unwrap();
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let records = load_records_from_file(input)?;
    match fmt.as_str() {
        "csv" => write_csv_records(out, &records)?,
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&records)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} record(s) to {}", records.len(), out);
    Ok(())
}

pub fn write_csv_records(path: &str, records: &[Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("Open CSV {}", path))?;
    wtr.write_record([
        "id",
        "date",
        "due_date",
        "status",
        "type",
        "payment",
        "amount",
        "code",
        "customer",
        "device",
        "description",
    ])?;
    for r in records {
        wtr.write_record([
            r.id.clone(),
            r.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            r.due_date
                .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
                .unwrap_or_default(),
            r.status.clone().unwrap_or_default(),
            r.doc_type.clone().unwrap_or_default(),
            r.payment.clone().unwrap_or_default(),
            r.amount.map(|a| a.to_string()).unwrap_or_default(),
            r.code.clone().unwrap_or_default(),
            r.customer.clone().unwrap_or_default(),
            r.device.clone().unwrap_or_default(),
            r.description.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
