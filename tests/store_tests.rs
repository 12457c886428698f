// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;

use fintrax::commands::doctor;
use fintrax::db;
use fintrax::models::TransactionKind;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn load_maps_rows_to_typed_transactions() {
    let conn = base_conn();
    conn.execute(
        "INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES \
        (1,'2025-01-15','Salary','5000.50','1','Salary',1)",
        [],
    )
    .unwrap();

    let txns = db::active_transactions(&conn).unwrap();

    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].kind, TransactionKind::Income);
    assert_eq!(txns[0].amount, "5000.50".parse().unwrap());
    assert_eq!(txns[0].date.to_string(), "2025-01-15");
}

#[test]
fn corrupt_rows_are_skipped_not_fatal() {
    let conn = base_conn();
    // simulate rows written by older/broken tooling
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (1,'not-a-date','Bad date','10','2','Food',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (2,'2025-01-02','Bad amount','ten','2','Food',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (3,'2025-01-03','Bad type','10','7','Food',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (4,'2025-01-04','Good','10','2','Food',1);
         PRAGMA ignore_check_constraints = OFF;",
    )
    .unwrap();

    let txns = db::active_transactions(&conn).unwrap();

    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].source, "Good");
}

#[test]
fn deleted_rows_are_only_loaded_on_request() {
    let conn = base_conn();
    conn.execute_batch(
        "INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (1,'2025-01-02','Keep','10','2','Food',1);
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (2,'2025-01-03','Gone','10','2','Food',2);",
    )
    .unwrap();

    assert_eq!(db::active_transactions(&conn).unwrap().len(), 1);
    assert_eq!(db::load_transactions(&conn, true).unwrap().len(), 2);
}

#[test]
fn doctor_survives_a_corrupt_table() {
    let conn = base_conn();
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO transactions(id,date,source,amount,type,category,status) VALUES
            (1,'not-a-date','','-3','9','Food',8);
         PRAGMA ignore_check_constraints = OFF;",
    )
    .unwrap();

    // every check fires on this row; the scan itself must not error
    doctor::handle(&conn).unwrap();
}
