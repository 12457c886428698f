// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics;
use crate::db;
use crate::models::{DateRange, Transaction, TransactionKind};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("trends", sub)) => trends(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("insights", sub)) => insights(conn, sub)?,
        Some(("summary", sub)) => summary(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Active transactions restricted to the requested window.
fn windowed(
    conn: &Connection,
    sub: &clap::ArgMatches,
) -> Result<(Vec<Transaction>, DateRange, NaiveDate)> {
    let range: DateRange = sub.get_one::<String>("range").unwrap().parse()?;
    let today = Utc::now().date_naive();
    let txns = db::active_transactions(conn)?;
    Ok((analytics::filter_range(&txns, range, today), range, today))
}

fn trends(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (txns, range, today) = windowed(conn, sub)?;
    let data = analytics::monthly_trends(&txns, range.trend_months(), today);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|t| {
                vec![
                    t.month.clone(),
                    format!("{:.2}", t.income),
                    format!("{:.2}", t.expense),
                    format!("{:.2}", t.net),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Net"], rows)
        );
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind: TransactionKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let (txns, _, _) = windowed(conn, sub)?;
    let data = analytics::category_breakdown(&txns, kind);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    format!("{:.2}", c.amount),
                    format!("{:.1}", c.percentage),
                    c.count.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share %", "Count"], rows)
        );
    }
    Ok(())
}

fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (txns, _, today) = windowed(conn, sub)?;
    let data = analytics::spending_insights(&txns, today);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No insights for this window yet.");
        } else {
            let rows = data
                .iter()
                .map(|i| {
                    vec![
                        i.kind.to_string(),
                        i.title.clone(),
                        i.description.clone(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Type", "Title", "Description"], rows)
            );
        }
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (txns, _, _) = windowed(conn, sub)?;
    let s = analytics::summarize(&txns);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Total Income".into(), format!("{:.2}", s.total_income)],
            vec!["Total Expense".into(), format!("{:.2}", s.total_expense)],
            vec!["Net Savings".into(), format!("{:.2}", s.net_savings)],
            vec!["Savings Rate".into(), format!("{:.1}%", s.savings_rate)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
