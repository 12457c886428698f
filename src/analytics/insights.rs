// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;

use super::{category_breakdown, ratio_percent};
use crate::models::{InsightKind, SpendingInsight, Transaction, TransactionKind};
use crate::utils::{month_start, months_back};

/// Shared aggregates handed to every rule.
struct RuleContext<'a> {
    today: NaiveDate,
    transactions: &'a [Transaction],
    expenses: Vec<&'a Transaction>,
    total_income: Decimal,
    total_expense: Decimal,
}

type Rule = fn(&RuleContext) -> Option<SpendingInsight>;

// Evaluated top to bottom; each rule contributes at most one insight and
// none short-circuits the others. Output order follows this list.
const RULES: [Rule; 5] = [
    spending_ratio,
    top_expense_category,
    weekend_pattern,
    transaction_frequency,
    month_over_month,
];

/// Heuristic observations about spending patterns. Returns an empty list
/// when there are no income and no expense transactions.
pub fn spending_insights(transactions: &[Transaction], today: NaiveDate) -> Vec<SpendingInsight> {
    let income: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .collect();
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .collect();
    if income.is_empty() && expenses.is_empty() {
        return Vec::new();
    }

    let ctx = RuleContext {
        today,
        transactions,
        total_income: income.iter().map(|t| t.amount).sum(),
        total_expense: expenses.iter().map(|t| t.amount).sum(),
        expenses,
    };

    RULES.iter().filter_map(|rule| rule(&ctx)).collect()
}

/// Spending ratio vs income: warn above 90% of income spent, applaud
/// below 70%. Skipped entirely when there is no income.
fn spending_ratio(ctx: &RuleContext) -> Option<SpendingInsight> {
    if ctx.total_income.is_zero() {
        return None;
    }
    if ctx.total_expense > ctx.total_income * Decimal::new(9, 1) {
        let spent = ratio_percent(ctx.total_expense, ctx.total_income).round() as i64;
        return Some(SpendingInsight {
            kind: InsightKind::Warning,
            title: "High Spending Alert".into(),
            description: format!(
                "You're spending {}% of your income. Consider reducing expenses.",
                spent
            ),
        });
    }
    if ctx.total_expense < ctx.total_income * Decimal::new(7, 1) {
        let saved =
            ratio_percent(ctx.total_income - ctx.total_expense, ctx.total_income).round() as i64;
        return Some(SpendingInsight {
            kind: InsightKind::Success,
            title: "Great Savings!".into(),
            description: format!("You're saving {}% of your income. Keep it up!", saved),
        });
    }
    None
}

/// Names the largest expense category; warns when it dominates (>40%).
fn top_expense_category(ctx: &RuleContext) -> Option<SpendingInsight> {
    let breakdown = category_breakdown(ctx.transactions, TransactionKind::Expense);
    let top = breakdown.first()?;
    let pct = top.percentage.round() as i64;
    if top.percentage > 40.0 {
        Some(SpendingInsight {
            kind: InsightKind::Warning,
            title: format!("High {} Spending", top.category),
            description: format!("{} accounts for {}% of your expenses.", top.category, pct),
        })
    } else {
        Some(SpendingInsight {
            kind: InsightKind::Info,
            title: "Top Expense Category".into(),
            description: format!(
                "Your biggest expense is {} at {}% of total spending.",
                top.category, pct
            ),
        })
    }
}

/// Weekend vs weekday per-transaction expense averages. Fires when the
/// weekend average runs more than 30% above the weekday average. Skipped
/// when there are no weekend expenses or the weekday average is zero (no
/// meaningful percentage exists).
fn weekend_pattern(ctx: &RuleContext) -> Option<SpendingInsight> {
    let is_weekend = |d: NaiveDate| matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
    let (weekend, weekday): (Vec<&Transaction>, Vec<&Transaction>) =
        ctx.expenses.iter().copied().partition(|t| is_weekend(t.date));

    let weekend_avg = average(&weekend);
    let weekday_avg = average(&weekday);
    if weekend.is_empty() || weekday_avg.is_zero() {
        return None;
    }
    if weekend_avg > weekday_avg * Decimal::new(13, 1) {
        let diff = ratio_percent(weekend_avg - weekday_avg, weekday_avg).round() as i64;
        return Some(SpendingInsight {
            kind: InsightKind::Info,
            title: "Weekend Spending Pattern".into(),
            description: format!("You spend {}% more on weekends.", diff),
        });
    }
    None
}

/// More than 3 transactions per day on average over the last 30 days.
fn transaction_frequency(ctx: &RuleContext) -> Option<SpendingInsight> {
    let cutoff = ctx.today - Duration::days(30);
    let recent = ctx.transactions.iter().filter(|t| t.date > cutoff).count();
    let per_day = recent as f64 / 30.0;
    if per_day > 3.0 {
        return Some(SpendingInsight {
            kind: InsightKind::Info,
            title: "High Transaction Frequency".into(),
            description: format!(
                "You're making an average of {:.1} transactions per day.",
                per_day
            ),
        });
    }
    None
}

/// Expense change vs the previous calendar month, when that month had any
/// spending and the swing exceeds 20% either way.
fn month_over_month(ctx: &RuleContext) -> Option<SpendingInsight> {
    let month_total = |month: NaiveDate| -> Decimal {
        ctx.expenses
            .iter()
            .filter(|t| month_start(t.date) == month)
            .map(|t| t.amount)
            .sum()
    };
    let current = month_total(month_start(ctx.today));
    let previous = month_total(months_back(ctx.today, 1));
    if previous.is_zero() {
        return None;
    }
    let change = ratio_percent(current - previous, previous);
    if change.abs() <= 20.0 {
        return None;
    }
    let (kind, verb) = if change > 0.0 {
        (InsightKind::Warning, "increased")
    } else {
        (InsightKind::Success, "decreased")
    };
    Some(SpendingInsight {
        kind,
        title: "Monthly Spending Change".into(),
        description: format!(
            "Your spending {} by {:.1}% compared to last month.",
            verb,
            change.abs()
        ),
    })
}

fn average(txns: &[&Transaction]) -> Decimal {
    if txns.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = txns.iter().map(|t| t.amount).sum();
    total / Decimal::from(txns.len() as u64)
}
