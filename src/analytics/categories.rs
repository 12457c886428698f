// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::ratio_percent;
use crate::models::{CategoryBreakdown, Transaction, TransactionKind};

/// Per-category totals for transactions of the given kind, sorted by
/// amount descending. Empty/missing categories collapse to
/// "Uncategorized". When the kind's total is zero every percentage is 0.
/// Equal amounts keep their first-seen input order, so output is
/// deterministic.
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<CategoryBreakdown> {
    // groups accumulate in first-seen order; index maps label -> slot
    let mut groups: Vec<(String, Decimal, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for t in transactions.iter().filter(|t| t.kind == kind) {
        let label = t.category_label();
        let slot = match index.get(label) {
            Some(&i) => i,
            None => {
                index.insert(label.to_string(), groups.len());
                groups.push((label.to_string(), Decimal::ZERO, 0));
                groups.len() - 1
            }
        };
        groups[slot].1 += t.amount;
        groups[slot].2 += 1;
    }

    let total: Decimal = groups.iter().map(|(_, amount, _)| *amount).sum();

    let mut breakdown: Vec<CategoryBreakdown> = groups
        .into_iter()
        .map(|(category, amount, count)| CategoryBreakdown {
            category,
            amount,
            percentage: if total.is_zero() {
                0.0
            } else {
                ratio_percent(amount, total)
            },
            count,
        })
        .collect();

    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}
