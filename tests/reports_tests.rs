// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;

use fintrax::{cli, commands::reports, db};

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_report(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintrax", "report"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("report", report_m)) = matches.subcommand() {
        reports::handle(conn, report_m)
    } else {
        panic!("no report subcommand");
    }
}

fn seeded_conn() -> Connection {
    let conn = base_conn();
    conn.execute_batch(
        "INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (1,'2025-01-02','Salary','5000','1','Salary',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (2,'2025-01-10','Groceries','200','2','Food',1);",
    )
    .unwrap();
    conn
}

#[test]
fn all_reports_render_for_a_seeded_store() {
    let conn = seeded_conn();
    run_report(&conn, &["trends", "--range", "all"]).unwrap();
    run_report(&conn, &["categories", "--kind", "expense", "--range", "all"]).unwrap();
    run_report(&conn, &["insights", "--range", "all"]).unwrap();
    run_report(&conn, &["summary", "--range", "all"]).unwrap();
}

#[test]
fn reports_render_json_variants() {
    let conn = seeded_conn();
    run_report(&conn, &["trends", "--range", "6m", "--json"]).unwrap();
    run_report(&conn, &["categories", "--jsonl"]).unwrap();
    run_report(&conn, &["summary", "--json"]).unwrap();
}

#[test]
fn reports_render_on_an_empty_store() {
    let conn = base_conn();
    run_report(&conn, &["trends"]).unwrap();
    run_report(&conn, &["categories"]).unwrap();
    run_report(&conn, &["insights"]).unwrap();
    run_report(&conn, &["summary"]).unwrap();
}

#[test]
fn bad_range_and_kind_are_rejected() {
    let conn = seeded_conn();
    assert!(run_report(&conn, &["trends", "--range", "2w"]).is_err());
    assert!(run_report(&conn, &["categories", "--kind", "transfer"]).is_err());
}
