// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure analytics over an in-memory transaction list. Every entry point
//! takes the reference date explicitly so callers (and tests) control the
//! clock; the CLI passes `Utc::now().date_naive()`.

pub mod categories;
pub mod insights;
pub mod trends;

pub use categories::category_breakdown;
pub use insights::spending_insights;
pub use trends::monthly_trends;

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{DateRange, FinanceSummary, Transaction, TransactionKind};

/// Transactions dated strictly after the range cutoff (`today` minus the
/// range width). `All` keeps everything.
pub fn filter_range(
    transactions: &[Transaction],
    range: DateRange,
    today: NaiveDate,
) -> Vec<Transaction> {
    match range.cutoff_months() {
        None => transactions.to_vec(),
        Some(months) => {
            let cutoff = today
                .checked_sub_months(Months::new(months))
                .unwrap_or(NaiveDate::MIN);
            transactions
                .iter()
                .filter(|t| t.date > cutoff)
                .cloned()
                .collect()
        }
    }
}

/// Income/expense totals, net savings, and the savings rate as a percent
/// of income (0 when there is no income).
pub fn summarize(transactions: &[Transaction]) -> FinanceSummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TransactionKind::Income => total_income += t.amount,
            TransactionKind::Expense => total_expense += t.amount,
        }
    }
    let net_savings = total_income - total_expense;
    let savings_rate = if total_income.is_zero() {
        0.0
    } else {
        ratio_percent(net_savings, total_income)
    };
    FinanceSummary {
        total_income,
        total_expense,
        net_savings,
        savings_rate,
    }
}

/// `part / whole * 100` as f64. Callers guarantee `whole` is nonzero.
pub(crate) fn ratio_percent(part: Decimal, whole: Decimal) -> f64 {
    ((part / whole) * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}
