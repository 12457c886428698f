// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TransactionKind, TransactionStatus};
use crate::utils::{parse_date, parse_decimal};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Reads the export CSV format (Date,Source,Category,Type,Amount,Status).
/// Malformed rows are skipped with a diagnostic and counted; they never
/// abort the rest of the batch. Valid rows land in one SQL transaction.
fn import_transactions(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut imported = 0usize;
    let mut skipped = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 2; // line 1 is the header
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                eprintln!("warning: skipping line {}: {}", line, e);
                skipped += 1;
                continue;
            }
        };
        match parse_record(&rec) {
            Ok(row) => {
                tx.execute(
                    "INSERT INTO transactions(date, source, amount, type, category, status)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        row.date.to_string(),
                        row.source,
                        row.amount.to_string(),
                        row.kind.code(),
                        row.category,
                        row.status.code()
                    ],
                )?;
                imported += 1;
            }
            Err(e) => {
                eprintln!("warning: skipping line {}: {:#}", line, e);
                skipped += 1;
            }
        }
    }
    tx.commit()?;

    if skipped > 0 {
        println!(
            "Imported {} transactions from {} ({} malformed rows skipped)",
            imported, path, skipped
        );
    } else {
        println!("Imported {} transactions from {}", imported, path);
    }
    Ok(())
}

struct ImportRow {
    date: NaiveDate,
    source: String,
    category: Option<String>,
    kind: TransactionKind,
    amount: Decimal,
    status: TransactionStatus,
}

fn parse_record(rec: &csv::StringRecord) -> Result<ImportRow> {
    let date = parse_date(rec.get(0).context("date missing")?.trim())?;
    let source = rec.get(1).context("source missing")?.trim().to_string();
    let category = rec
        .get(2)
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != "N/A")
        .map(str::to_string);
    let kind: TransactionKind = rec.get(3).context("type missing")?.trim().parse()?;
    let amount = parse_decimal(rec.get(4).context("amount missing")?.trim())?;
    if amount.is_sign_negative() {
        return Err(anyhow!("negative amount '{}'", amount));
    }
    let status: TransactionStatus = match rec.get(5).map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse()?,
        None => TransactionStatus::Active,
    };
    Ok(ImportRow {
        date,
        source,
        category,
        kind,
        amount,
        status,
    })
}
