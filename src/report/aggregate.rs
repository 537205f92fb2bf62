use rust_decimal::Decimal;
use serde::Serialize;

use super::group::{group_by_category, group_by_month, Grouped};
use crate::errors::{StatementParseError, StatementResult};
use crate::types::{Category, Transaction};

/// Total and row count of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendAggregate {
    pub label: String,
    pub total: Decimal,
    pub count: usize,
}

impl SpendAggregate {
    /// Fails with `TotalOverflow` when the group's sum leaves `Decimal` range.
    fn from_group(label: impl Into<String>, members: &[&Transaction]) -> StatementResult<Self> {
        let label = label.into();
        let total = members
            .iter()
            .try_fold(Decimal::ZERO, |acc, txn| acc.checked_add(txn.amount))
            .ok_or_else(|| StatementParseError::TotalOverflow(label.clone()))?;

        Ok(Self {
            label,
            total,
            count: members.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCategoricalAggregate {
    pub month: String,
    pub categories: Vec<SpendAggregate>,
}

/// One aggregate per category, ascending by total. Equal totals keep the
/// order in which their categories first appeared.
pub fn aggregate_categorical(
    grouped: &Grouped<'_, Category>,
) -> StatementResult<Vec<SpendAggregate>> {
    let mut aggregates = grouped
        .iter()
        .map(|(category, members)| SpendAggregate::from_group(category.as_str(), members))
        .collect::<StatementResult<Vec<_>>>()?;

    aggregates.sort_by(|a, b| a.total.cmp(&b.total));
    Ok(aggregates)
}

/// One aggregate per month in first-appearance order. Not sorted.
pub fn aggregate_monthly(grouped: &Grouped<'_, String>) -> StatementResult<Vec<SpendAggregate>> {
    grouped
        .iter()
        .map(|(month, members)| SpendAggregate::from_group(month.as_str(), members))
        .collect()
}

pub fn aggregate_monthly_categorical(
    transactions: &[Transaction],
) -> StatementResult<Vec<MonthlyCategoricalAggregate>> {
    group_by_month(transactions)
        .into_iter()
        .map(|(month, members)| -> StatementResult<MonthlyCategoricalAggregate> {
            Ok(MonthlyCategoricalAggregate {
                categories: aggregate_categorical(&group_by_category(members))?,
                month,
            })
        })
        .collect()
}
