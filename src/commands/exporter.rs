// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::Transaction;
use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;
use serde_json::json;
use std::io::Write;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let include_deleted = sub.get_flag("all");

    let txns = db::load_transactions(conn, include_deleted)?;

    match fmt.as_str() {
        "csv" => {
            let file = std::fs::File::create(out)
                .with_context(|| format!("Create export file {}", out))?;
            write_csv(file, &txns)?;
        }
        "json" => {
            let file = std::fs::File::create(out)
                .with_context(|| format!("Create export file {}", out))?;
            write_json(file, &txns)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    println!("Exported {} transactions to {}", txns.len(), out);
    Ok(())
}

/// CSV serialization: header `Date,Source,Category,Type,Amount,Status`,
/// one row per transaction, every field double-quoted. Dates are
/// YYYY-MM-DD, amounts carry exactly two decimals, a missing category
/// becomes "N/A".
pub fn write_csv<W: Write>(w: W, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(w);
    wtr.write_record(["Date", "Source", "Category", "Type", "Amount", "Status"])?;
    for t in transactions {
        let category = match t.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "N/A",
        };
        wtr.write_record([
            t.date.to_string(),
            t.source.clone(),
            category.to_string(),
            t.kind.to_string(),
            format!("{:.2}", t.amount),
            t.status.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(w: W, transactions: &[Transaction]) -> Result<()> {
    let items: Vec<serde_json::Value> = transactions
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "date": t.date.to_string(),
                "source": t.source,
                "amount": format!("{:.2}", t.amount),
                "type": t.kind.to_string(),
                "category": t.category,
                "status": t.status.to_string(),
            })
        })
        .collect();
    serde_json::to_writer_pretty(w, &items)?;
    Ok(())
}
