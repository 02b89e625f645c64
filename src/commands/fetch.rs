// Copyright (c) Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::commands::search::entity_from_matches;
use crate::utils::{fmt_money, pretty_table};
use crate::{api, config};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let entity = entity_from_matches(m)?;
    let ctx = config::tenant_context()?;
    let records = api::fetch_records(&ctx, entity)?;

    if let Some(out) = m.get_one::<String>("out") {
        std::fs::write(out, serde_json::to_string_pretty(&records)?)
            .with_context(|| format!("Write {}", out))?;
        println!("Saved {} record(s) to {}", records.len(), out);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.date.format("%Y-%m-%d").to_string(),
                r.status.clone().unwrap_or_default(),
                r.amount.map(|a| fmt_money(&a)).unwrap_or_default(),
                r.customer.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Status", "Amount", "Customer"], rows)
    );
    println!("{} record(s)", records.len());
    Ok(())
}
