mod dto;
mod parser;
mod types;

pub mod prelude {
    pub use super::dto::ChaseTransactionRaw;
    pub use super::parser::{ChaseCsvParser, REQUIRED_COLUMNS};
    pub use super::types::StatementDate;
}
