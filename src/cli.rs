// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON Lines"),
    )
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .default_value("6m")
        .help("Reporting window: 1m, 3m, 6m, 1y or all")
}

pub fn build_cli() -> Command {
    Command::new("fintrax")
        .about("Personal finance transaction tracking and spending analytics")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Date (YYYY-MM-DD)"),
                        )
                        .arg(
                            Arg::new("source")
                                .long("source")
                                .required(true)
                                .help("Free-text description, e.g. 'Salary'"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Non-negative amount"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category label (optional)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(Arg::new("kind").long("kind").help("income or expense"))
                        .arg(Arg::new("category").long("category").help("Filter by category"))
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Include soft-deleted transactions"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Max rows"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Soft-delete a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64))
                                .help("Transaction id"),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Analytics reports")
                .subcommand(json_flags(
                    Command::new("trends")
                        .about("Monthly income/expense/net trend")
                        .arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Category breakdown")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("expense")
                                .help("income or expense"),
                        )
                        .arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("insights")
                        .about("Heuristic spending insights")
                        .arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Income/expense totals and savings rate")
                        .arg(range_arg()),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export transactions to CSV or JSON")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .required(true)
                            .help("Output file path"),
                    )
                    .arg(
                        Arg::new("all")
                            .long("all")
                            .action(ArgAction::SetTrue)
                            .help("Include soft-deleted transactions"),
                    ),
            ),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import transactions from a CSV file")
                    .arg(
                        Arg::new("path")
                            .long("path")
                            .required(true)
                            .help("CSV file in the export format"),
                    ),
            ),
        )
        .subcommand(Command::new("doctor").about("Scan the database for integrity issues"))
}
