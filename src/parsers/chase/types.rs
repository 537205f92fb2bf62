use crate::errors::StatementParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date column as exported on the statement, always `MM/DD/YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementDate(String);

impl StatementDate {
    pub const FORMAT: &'static str = "%m/%d/%Y";

    pub fn parse(&self) -> Result<NaiveDate, StatementParseError> {
        let s = self.0.trim();

        // chrono accepts a 2-digit %Y, the export never writes one
        let year_digits = s.rsplit('/').next().map(str::len).unwrap_or(0);
        if year_digits != 4 {
            return Err(StatementParseError::MalformedDate(self.0.clone()));
        }

        NaiveDate::parse_from_str(s, Self::FORMAT)
            .map_err(|_| StatementParseError::MalformedDate(self.0.clone()))
    }
}

impl From<String> for StatementDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StatementDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<StatementDate> for NaiveDate {
    type Error = StatementParseError;

    fn try_from(date: StatementDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}
