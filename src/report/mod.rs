//! Filtering, grouping and aggregation of parsed transactions.
//!
//! Nothing in here performs I/O or logs; every function is a pure transform
//! over an in-memory slice.

mod aggregate;
mod filter;
mod group;
mod kind;

pub use aggregate::{
    aggregate_categorical, aggregate_monthly, aggregate_monthly_categorical,
    MonthlyCategoricalAggregate, SpendAggregate,
};
pub use filter::filter_payments;
pub use group::{group_by_category, group_by_month, Grouped};
pub use kind::{generate_report, Report, ReportKind};
