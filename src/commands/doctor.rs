// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TransactionKind, TransactionStatus};
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Scans raw rows for the malformed shapes the reporting path would skip:
/// unparseable dates or amounts, out-of-range type/status codes, negative
/// amounts, empty sources.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id, date, source, amount, type, status FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let source: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let kind: i64 = r.get(4)?;
        let status: i64 = r.get(5)?;

        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_date".into(), format!("tx {}: '{}'", id, date)]);
        }
        match amount.parse::<Decimal>() {
            Ok(a) if a.is_sign_negative() => {
                rows.push(vec!["negative_amount".into(), format!("tx {}: {}", id, amount)]);
            }
            Ok(_) => {}
            Err(_) => rows.push(vec!["bad_amount".into(), format!("tx {}: '{}'", id, amount)]),
        }
        if TransactionKind::try_from(kind).is_err() {
            rows.push(vec!["unknown_type".into(), format!("tx {}: {}", id, kind)]);
        }
        if TransactionStatus::try_from(status).is_err() {
            rows.push(vec!["unknown_status".into(), format!("tx {}: {}", id, status)]);
        }
        if source.trim().is_empty() {
            rows.push(vec!["empty_source".into(), format!("tx {}", id)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
