// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;

use fintrax::{cli, commands::transactions, db};

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_tx(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintrax", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(conn, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_records_an_active_transaction() {
    let conn = base_conn();
    run_tx(
        &conn,
        &[
            "add",
            "--date",
            "2025-01-15",
            "--source",
            "Salary",
            "--amount",
            "5000",
            "--kind",
            "income",
            "--category",
            "Salary",
        ],
    )
    .unwrap();

    let (date, amount, kind, status): (String, String, i64, i64) = conn
        .query_row(
            "SELECT date, amount, type, status FROM transactions",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .unwrap();
    assert_eq!(date, "2025-01-15");
    assert_eq!(amount, "5000");
    assert_eq!(kind, 1);
    assert_eq!(status, 1);
}

#[test]
fn add_rejects_bad_dates_and_kinds() {
    let conn = base_conn();
    assert!(run_tx(
        &conn,
        &[
            "add",
            "--date",
            "15/01/2025",
            "--source",
            "Salary",
            "--amount",
            "5000",
            "--kind",
            "income"
        ],
    )
    .is_err());

    assert!(run_tx(
        &conn,
        &[
            "add",
            "--date",
            "2025-01-15",
            "--source",
            "Salary",
            "--amount",
            "5000",
            "--kind",
            "transfer"
        ],
    )
    .is_err());
}

#[test]
fn add_rejects_negative_amounts() {
    let conn = base_conn();
    assert!(run_tx(
        &conn,
        &[
            "add",
            "--date",
            "2025-01-15",
            "--source",
            "Oops",
            "--amount=-5",
            "--kind",
            "expense"
        ],
    )
    .is_err());
}

#[test]
fn rm_soft_deletes_and_is_idempotent_only_once() {
    let conn = base_conn();
    run_tx(
        &conn,
        &[
            "add",
            "--date",
            "2025-01-15",
            "--source",
            "Groceries",
            "--amount",
            "20",
            "--kind",
            "expense",
        ],
    )
    .unwrap();

    run_tx(&conn, &["rm", "--id", "1"]).unwrap();

    let status: i64 = conn
        .query_row("SELECT status FROM transactions WHERE id=1", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(status, 2);

    // already deleted
    assert!(run_tx(&conn, &["rm", "--id", "1"]).is_err());
    // never existed
    assert!(run_tx(&conn, &["rm", "--id", "99"]).is_err());
}

#[test]
fn list_hides_deleted_rows_by_default() {
    let conn = base_conn();
    conn.execute_batch(
        "INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (1,'2025-01-02','Groceries','20','2','Food',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (2,'2025-01-03','Mistake','30','2','Food',2);",
    )
    .unwrap();

    let matches = cli::build_cli().get_matches_from(["fintrax", "tx", "list"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].source, "Groceries");

    let matches = cli::build_cli().get_matches_from(["fintrax", "tx", "list", "--all"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn list_filters_by_kind_and_month() {
    let conn = base_conn();
    conn.execute_batch(
        "INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (1,'2025-01-02','Salary','5000','1','Salary',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (2,'2025-01-10','Groceries','20','2','Food',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (3,'2025-02-10','Groceries','25','2','Food',1);",
    )
    .unwrap();

    let matches =
        cli::build_cli().get_matches_from(["fintrax", "tx", "list", "--kind", "expense"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.kind == "Expense"));

    let matches =
        cli::build_cli().get_matches_from(["fintrax", "tx", "list", "--month", "2025-01"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.date.starts_with("2025-01")));
}
