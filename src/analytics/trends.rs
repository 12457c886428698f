// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{MonthlyTrend, Transaction, TransactionKind};
use crate::utils::{month_label, month_start, months_back};

/// Income, expense, and net sums for the last `months` calendar months,
/// in chronological order ending at `today`'s month. Months with no
/// transactions come back as zero rows; transactions dated outside the
/// window are dropped silently.
pub fn monthly_trends(
    transactions: &[Transaction],
    months: usize,
    today: NaiveDate,
) -> Vec<MonthlyTrend> {
    let mut window = Vec::with_capacity(months);
    for back in (0..months).rev() {
        window.push(months_back(today, back as u32));
    }

    let mut sums: HashMap<NaiveDate, (Decimal, Decimal)> = window
        .iter()
        .map(|m| (*m, (Decimal::ZERO, Decimal::ZERO)))
        .collect();

    for t in transactions {
        if let Some(bucket) = sums.get_mut(&month_start(t.date)) {
            match t.kind {
                TransactionKind::Income => bucket.0 += t.amount,
                TransactionKind::Expense => bucket.1 += t.amount,
            }
        }
    }

    window
        .into_iter()
        .map(|m| {
            let (income, expense) = sums[&m];
            MonthlyTrend {
                month: month_label(m),
                income,
                expense,
                net: income - expense,
            }
        })
        .collect()
}
