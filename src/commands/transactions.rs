// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TransactionKind, TransactionStatus};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::{params, Connection};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let source = sub.get_one::<String>("source").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind: TransactionKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if amount.is_sign_negative() {
        return Err(anyhow!(
            "Amount must be non-negative, got '{}'; use --kind expense for outflows",
            amount
        ));
    }

    conn.execute(
        "INSERT INTO transactions(date, source, amount, type, category, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            date.to_string(),
            source,
            amount.to_string(),
            kind.code(),
            category,
            TransactionStatus::Active.code()
        ],
    )?;
    println!("Recorded {} {} on {} ('{}')", kind, amount, date, source);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    // soft delete: the row stays for exports run with --all
    let changed = conn.execute(
        "UPDATE transactions SET status=?1 WHERE id=?2 AND status=?3",
        params![
            TransactionStatus::Deleted.code(),
            id,
            TransactionStatus::Active.code()
        ],
    )?;
    if changed == 0 {
        return Err(anyhow!("No active transaction with id {}", id));
    }
    println!("Deleted transaction {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.source.clone(),
                    r.amount.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Source", "Amount", "Type", "Category", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub source: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub status: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT id, date, source, amount, type, category, status FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if !sub.get_flag("all") {
        sql.push_str(" AND status=?");
        params_vec.push(TransactionStatus::Active.code().to_string());
    }
    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(parse_month(month)?);
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        let kind: TransactionKind = kind.parse()?;
        sql.push_str(" AND type=?");
        params_vec.push(kind.code().to_string());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let source: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let kind: i64 = r.get(4)?;
        let category: Option<String> = r.get(5)?;
        let status: i64 = r.get(6)?;
        let kind = match TransactionKind::try_from(kind) {
            Ok(k) => k.to_string(),
            Err(_) => kind.to_string(),
        };
        let status = match TransactionStatus::try_from(status) {
            Ok(s) => s.to_string(),
            Err(_) => status.to_string(),
        };
        data.push(TransactionRow {
            id,
            date,
            source,
            amount,
            kind,
            category: category.unwrap_or_default(),
            status,
        });
    }
    Ok(data)
}
