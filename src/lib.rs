//! Spend reports from credit card statement exports.
//!
//! ```rust,ignore
//! use spend_report::{filter_payments, generate_report, ParserBuilder, ReportKind};
//!
//! let transactions = ParserBuilder::new()
//!     .filename("Activity.csv")
//!     .parse()?;
//!
//! let spend = filter_payments(transactions);
//! let report = generate_report(ReportKind::Monthly, &spend)?;
//! println!("{}", spend_report::render::render_report(&report));
//! ```

mod builder;
mod types;

pub mod errors;
pub mod parsers;
pub mod render;
pub mod report;

pub use builder::{FileFormat, ParserBuilder};
pub use parsers::prelude::*;
pub use report::{
    filter_payments, generate_report, MonthlyCategoricalAggregate, Report, ReportKind,
    SpendAggregate,
};
pub use types::{Category, Transaction, TransactionType};
