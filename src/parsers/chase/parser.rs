use super::dto::ChaseTransactionRaw;
use crate::errors::StatementResult;
use crate::parsers::traits::Parser;
use crate::types::Transaction;
use csv::ReaderBuilder;

/// Columns every credit card export carries, in export order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Transaction Date",
    "Post Date",
    "Description",
    "Category",
    "Type",
    "Amount",
    "Memo",
];

pub struct ChaseCsvParser;

impl Parser for ChaseCsvParser {
    type Output = Transaction;

    /// Decided by the header row alone; the file name plays no part.
    fn is_supported(_filename: Option<&str>, content: &str) -> bool {
        let header = content.lines().next().unwrap_or("").trim_start_matches('\u{feff}');
        let columns: Vec<&str> = header.split(',').map(|c| c.trim().trim_matches('"')).collect();

        REQUIRED_COLUMNS.iter().all(|required| columns.contains(required))
    }

    /// Stops at the first row that fails to convert.
    fn parse(content: &str) -> StatementResult<Vec<Self::Output>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

        reader
            .deserialize::<ChaseTransactionRaw>()
            .map(|row| -> StatementResult<Transaction> { row?.try_into() })
            .collect()
    }
}
