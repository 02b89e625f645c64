// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use officina::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("config", sub)) => commands::config::handle(sub)?,
        Some(("fetch", sub)) => commands::fetch::handle(sub)?,
        Some(("search", sub)) => commands::search::handle(sub)?,
        Some(("import", sub)) => commands::importer::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
