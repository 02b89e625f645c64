// Copyright (c) Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(sub),
        Some(("show", _)) => show(),
        _ => Ok(()),
    }
}

fn set(sub: &clap::ArgMatches) -> Result<()> {
    let mut cfg = config::load()?;
    if let Some(v) = sub.get_one::<String>("base-url") {
        cfg.base_url = v.trim_end_matches('/').to_string();
    }
    if let Some(v) = sub.get_one::<String>("tenant") {
        cfg.tenant_id = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("token") {
        cfg.token = v.clone();
    }
    let path = config::save(&cfg)?;
    println!("Config saved to {}", path.display());
    Ok(())
}

fn show() -> Result<()> {
    let cfg = config::load()?;
    let mask = if cfg.token.is_empty() {
        String::new()
    } else {
        format!("{}…", cfg.token.chars().take(6).collect::<String>())
    };
    let rows = vec![
        vec!["base_url".to_string(), cfg.base_url],
        vec!["tenant_id".to_string(), cfg.tenant_id],
        vec!["token".to_string(), mask],
    ];
    println!("{}", pretty_table(&["Key", "Value"], rows));
    Ok(())
}
