// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

use crate::models::{Transaction, TransactionKind, TransactionStatus};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.fintrax", "Fintrax", "fintrax"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("fintrax.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        source TEXT NOT NULL,
        amount TEXT NOT NULL,
        type INTEGER NOT NULL DEFAULT 1 CHECK(type BETWEEN 1 AND 2),
        category TEXT,
        status INTEGER NOT NULL DEFAULT 1 CHECK(status BETWEEN 1 AND 2),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )?;
    Ok(())
}

/// Active transactions in chronological order. Rows that fail validation
/// (corrupt date or amount text, out-of-range type/status codes) are skipped
/// with a diagnostic instead of aborting the load; one bad row must not
/// block reporting on the rest.
pub fn active_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    load_transactions(conn, false)
}

pub fn load_transactions(conn: &Connection, include_deleted: bool) -> Result<Vec<Transaction>> {
    let sql = if include_deleted {
        "SELECT id, date, source, amount, type, category, status
         FROM transactions ORDER BY date, id"
    } else {
        "SELECT id, date, source, amount, type, category, status
         FROM transactions WHERE status=1 ORDER BY date, id"
    };
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let source: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let kind: i64 = r.get(4)?;
        let category: Option<String> = r.get(5)?;
        let status: i64 = r.get(6)?;
        match map_row(id, &date, source, &amount, kind, category, status) {
            Ok(t) => data.push(t),
            Err(e) => eprintln!("warning: skipping transaction {}: {:#}", id, e),
        }
    }
    Ok(data)
}

fn map_row(
    id: i64,
    date: &str,
    source: String,
    amount: &str,
    kind: i64,
    category: Option<String>,
    status: i64,
) -> Result<Transaction> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}'", date))?;
    let amount = amount
        .parse()
        .with_context(|| format!("invalid amount '{}'", amount))?;
    let kind = TransactionKind::try_from(kind)?;
    let status = TransactionStatus::try_from(status)?;
    Ok(Transaction {
        id,
        date,
        source,
        amount,
        kind,
        category,
        status,
    })
}
