use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::aggregate::{
    aggregate_categorical, aggregate_monthly, aggregate_monthly_categorical,
    MonthlyCategoricalAggregate, SpendAggregate,
};
use super::group::{group_by_category, group_by_month};
use crate::errors::{StatementParseError, StatementResult};
use crate::types::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[default]
    Categorical,
    Monthly,
    MonthlyCategorical,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Categorical,
        ReportKind::Monthly,
        ReportKind::MonthlyCategorical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Categorical => "categorical",
            ReportKind::Monthly => "monthly",
            ReportKind::MonthlyCategorical => "monthly_categorical",
        }
    }

    /// Column headers of the table(s) this kind produces.
    pub fn headers(&self) -> [&'static str; 3] {
        match self {
            ReportKind::Monthly => ["Month", "Amount", "Count"],
            ReportKind::Categorical | ReportKind::MonthlyCategorical => {
                ["Category", "Amount", "Count"]
            }
        }
    }
}

impl FromStr for ReportKind {
    type Err = StatementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StatementParseError::InvalidReportKind(s.to_string()))
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregates ready for a table renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Report {
    Categorical(Vec<SpendAggregate>),
    Monthly(Vec<SpendAggregate>),
    MonthlyCategorical(Vec<MonthlyCategoricalAggregate>),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Categorical(_) => ReportKind::Categorical,
            Report::Monthly(_) => ReportKind::Monthly,
            Report::MonthlyCategorical(_) => ReportKind::MonthlyCategorical,
        }
    }

    pub fn headers(&self) -> [&'static str; 3] {
        self.kind().headers()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Report::Categorical(rows) | Report::Monthly(rows) => rows.is_empty(),
            Report::MonthlyCategorical(months) => months.is_empty(),
        }
    }
}

/// Runs the grouping and aggregation pipeline for `kind`.
///
/// Expects payments to have been filtered out already.
pub fn generate_report(
    kind: ReportKind,
    transactions: &[Transaction],
) -> StatementResult<Report> {
    let report = match kind {
        ReportKind::Categorical => {
            Report::Categorical(aggregate_categorical(&group_by_category(transactions))?)
        }
        ReportKind::Monthly => Report::Monthly(aggregate_monthly(&group_by_month(transactions))?),
        ReportKind::MonthlyCategorical => {
            Report::MonthlyCategorical(aggregate_monthly_categorical(transactions)?)
        }
    };

    Ok(report)
}
