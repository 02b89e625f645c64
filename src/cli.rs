// Copyright (c) 2025 Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

const ENTITIES: [&str; 4] = ["invoices", "quotations", "sales", "bookings"];

pub fn build_cli() -> Command {
    Command::new("officina")
        .version(crate_version!())
        .about("Repair-shop record search, filtering, and rollup statistics")
        .subcommand(
            Command::new("config")
                .about("Manage the tenant context used for backend calls")
                .subcommand(
                    Command::new("set")
                        .about("Set tenant context fields")
                        .arg(Arg::new("base-url").long("base-url"))
                        .arg(Arg::new("tenant").long("tenant"))
                        .arg(Arg::new("token").long("token")),
                )
                .subcommand(Command::new("show").about("Show the stored tenant context")),
        )
        .subcommand(
            Command::new("fetch")
                .about("Fetch a record collection from the backend")
                .arg(
                    Arg::new("entity")
                        .required(true)
                        .value_parser(ENTITIES),
                )
                .arg(Arg::new("out").long("out").help("Save records as JSON")),
        )
        .subcommand(
            Command::new("search")
                .about("Search, filter, and aggregate records")
                .arg(
                    Arg::new("entity")
                        .required(true)
                        .value_parser(ENTITIES),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .help("Read records from a JSON or CSV file instead of the backend"),
                )
                .arg(Arg::new("query").long("query").short('q'))
                .arg(Arg::new("status").long("status"))
                .arg(Arg::new("type").long("type"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(["new", "overdue", "completed"]),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_parser(["today", "week", "month", "year", "custom"]),
                )
                .arg(Arg::new("from").long("from").help("Custom window start (YYYY-MM-DD)"))
                .arg(Arg::new("to").long("to").help("Custom window end (YYYY-MM-DD)"))
                .arg(Arg::new("min-amount").long("min-amount"))
                .arg(Arg::new("max-amount").long("max-amount"))
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .action(ArgAction::SetTrue)
                        .help("Print rollup breakdowns alongside the results"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("import")
                .about("Convert a CSV record file to the canonical JSON shape")
                .arg(Arg::new("path").long("path").required(true))
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Export a record file as CSV or JSON")
                .arg(Arg::new("input").long("input").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
}
