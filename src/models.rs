// Copyright (c) 2025 Fintrax Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label substituted for a missing or empty transaction category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Error)]
#[error("invalid {what} '{value}'")]
pub struct ParseEnumError {
    pub what: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn code(self) -> i64 {
        match self {
            TransactionKind::Income => 1,
            TransactionKind::Expense => 2,
        }
    }
}

impl TryFrom<i64> for TransactionKind {
    type Error = ParseEnumError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TransactionKind::Income),
            2 => Ok(TransactionKind::Expense),
            other => Err(ParseEnumError {
                what: "transaction type",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ParseEnumError {
                what: "transaction type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Active,
    Deleted,
}

impl TransactionStatus {
    pub fn code(self) -> i64 {
        match self {
            TransactionStatus::Active => 1,
            TransactionStatus::Deleted => 2,
        }
    }
}

impl TryFrom<i64> for TransactionStatus {
    type Error = ParseEnumError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TransactionStatus::Active),
            2 => Ok(TransactionStatus::Deleted),
            other => Err(ParseEnumError {
                what: "transaction status",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(TransactionStatus::Active),
            "deleted" => Ok(TransactionStatus::Deleted),
            _ => Err(ParseEnumError {
                what: "transaction status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Active => write!(f, "Active"),
            TransactionStatus::Deleted => write!(f, "Deleted"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub source: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Category label with the empty/missing case collapsed.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED_LABEL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Decimal,
    pub percentage: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Warning,
    Success,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightKind::Info => write!(f, "info"),
            InsightKind::Warning => write!(f, "warning"),
            InsightKind::Success => write!(f, "success"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
    pub savings_rate: f64,
}

/// Reporting window selector. `All` keeps the full history and widens the
/// trend table to its maximum of 24 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    All,
}

impl DateRange {
    /// Number of calendar months shown on the trend report for this range.
    pub fn trend_months(self) -> usize {
        match self {
            DateRange::OneMonth => 1,
            DateRange::ThreeMonths => 3,
            DateRange::SixMonths => 6,
            DateRange::OneYear => 12,
            DateRange::All => 24,
        }
    }

    /// Cutoff width in months, `None` for the unbounded range.
    pub fn cutoff_months(self) -> Option<u32> {
        match self {
            DateRange::OneMonth => Some(1),
            DateRange::ThreeMonths => Some(3),
            DateRange::SixMonths => Some(6),
            DateRange::OneYear => Some(12),
            DateRange::All => None,
        }
    }
}

impl FromStr for DateRange {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1m" => Ok(DateRange::OneMonth),
            "3m" => Ok(DateRange::ThreeMonths),
            "6m" => Ok(DateRange::SixMonths),
            "1y" => Ok(DateRange::OneYear),
            "all" => Ok(DateRange::All),
            _ => Err(ParseEnumError {
                what: "date range",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRange::OneMonth => write!(f, "1m"),
            DateRange::ThreeMonths => write!(f, "3m"),
            DateRange::SixMonths => write!(f, "6m"),
            DateRange::OneYear => write!(f, "1y"),
            DateRange::All => write!(f, "all"),
        }
    }
}
