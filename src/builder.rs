use std::fs;

use crate::{errors::StatementParseError, parsers::prelude::*, types::Transaction};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "chase_csv")]
    ChaseCsv,
}

impl FileFormat {
    fn parse(&self, content: &str) -> Result<Vec<Transaction>, StatementParseError> {
        match self {
            FileFormat::ChaseCsv => ChaseCsvParser::parse(content),
        }
    }

    fn detect(filename: Option<&str>, content: Option<&str>) -> Result<Self, StatementParseError> {
        if let Some(content) = content {
            if ChaseCsvParser::is_supported(filename, content) {
                return Ok(FileFormat::ChaseCsv);
            }
        }

        if let Some(filename) = filename {
            if filename.to_lowercase().ends_with(".csv") {
                return Ok(FileFormat::ChaseCsv);
            }
        }

        Err(StatementParseError::UnsupportedFormat)
    }
}

/// Loads a statement export into typed transactions.
///
/// Content given directly takes precedence over reading `filename`.
#[derive(Default)]
pub struct ParserBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<FileFormat>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// All-or-nothing: the first malformed row fails the whole load.
    pub fn parse(self) -> Result<Vec<Transaction>, StatementParseError> {
        let content = match (self.content, self.filepath.as_deref()) {
            (Some(content), _) => content,
            (None, Some(path)) => {
                debug!(%path, "reading statement");
                fs::read_to_string(path)?
            }
            (None, None) => return Err(StatementParseError::MissingContentAndFilepath),
        };

        let format = self.format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(self.filepath.as_deref(), Some(&content)))?;
        debug!(?format, "statement format selected");

        let transactions = format.parse(&content)?;
        debug!(count = transactions.len(), "statement rows parsed");

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE_CSV: &str = "Transaction Date,Post Date,Description,Category,Type,Amount,Memo
10/07/2022,10/08/2022,AMC THEATRES,Entertainment,Sale,-24.99,
10/10/2022,10/10/2022,Payment Thank You-Mobile,,Payment,50.00,
";

    #[test]
    fn test_builder_new() {
        let builder = ParserBuilder::new();
        assert!(builder.content.is_none());
        assert!(builder.filepath.is_none());
        assert!(builder.format.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let builder = ParserBuilder::new()
            .content("content")
            .filename("activity.csv")
            .format(FileFormat::ChaseCsv);

        assert_eq!(builder.content.as_deref(), Some("content"));
        assert_eq!(builder.filepath.as_deref(), Some("activity.csv"));
        assert_eq!(builder.format, Some(FileFormat::ChaseCsv));
    }

    #[test]
    fn test_builder_missing_content() {
        let result = ParserBuilder::new().parse();
        assert!(matches!(result, Err(StatementParseError::MissingContentAndFilepath)));
    }

    #[test]
    fn test_builder_unrecognized_content() {
        let result = ParserBuilder::new().content("Date,Amount\n2025-12-26,1.00\n").parse();
        assert!(matches!(result, Err(StatementParseError::UnsupportedFormat)));
    }

    #[rstest]
    #[case("statement.txt")]
    #[case("Activity.CSV")]
    #[case("chase_export")]
    fn test_parse_file_detected_by_content(#[case] name: &str) {
        let dir = std::env::temp_dir().join(format!("spend-report-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, SAMPLE_CSV).unwrap();

        let result = ParserBuilder::new().filename(path.to_str().unwrap()).parse();
        fs::remove_dir_all(&dir).unwrap();

        let transactions = result.unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].description, "Payment Thank You-Mobile");
    }

    #[test]
    fn test_parse_no_content_no_filepath() {
        let result = ParserBuilder::new().format(FileFormat::ChaseCsv).parse();
        assert!(matches!(result, Err(StatementParseError::MissingContentAndFilepath)));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = ParserBuilder::new()
            .filename("/nonexistent/spend-report/activity.csv")
            .parse();
        assert!(matches!(result, Err(StatementParseError::ReadContentFailed(_))));
    }

    #[rstest]
    #[case(Some(FileFormat::ChaseCsv), None)]
    #[case(None, None)]
    #[case(None, Some("activity.csv"))]
    fn test_parse_with_different_detection_methods(
        #[case] format: Option<FileFormat>,
        #[case] filename: Option<&str>,
    ) {
        let mut builder = ParserBuilder::new().content(SAMPLE_CSV);

        if let Some(fmt) = format {
            builder = builder.format(fmt);
        }
        if let Some(fname) = filename {
            builder = builder.filename(fname);
        }

        let transactions = builder.parse().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, Decimal::from_str("-24.99").unwrap());
    }

    #[rstest]
    #[case(None, Some(SAMPLE_CSV), true)]
    #[case(Some("activity.csv"), None, true)]
    #[case(Some("activity.CSV"), Some(SAMPLE_CSV), true)]
    #[case(Some("activity.qfx"), Some("<OFX>"), false)]
    #[case(None, Some("not a statement"), false)]
    #[case(None, None, false)]
    fn test_file_format_detect(
        #[case] filename: Option<&str>,
        #[case] content: Option<&str>,
        #[case] should_succeed: bool,
    ) {
        let result = FileFormat::detect(filename, content);
        if should_succeed {
            assert_eq!(result.unwrap(), FileFormat::ChaseCsv);
        } else {
            assert!(matches!(result.unwrap_err(), StatementParseError::UnsupportedFormat));
        }
    }

    #[test]
    fn test_parse_invalid_row_fails_whole_load() {
        let content = format!("{SAMPLE_CSV}10/11/2022,10/12/2022,GAS STATION,Gas,Sale,forty,\n");
        let result = ParserBuilder::new().content(&content).parse();
        assert!(matches!(result, Err(StatementParseError::MalformedAmount(ref v)) if v == "forty"));
    }

    #[test]
    fn test_file_format_serialization() {
        let json = serde_json::to_string(&FileFormat::ChaseCsv).unwrap();
        assert_eq!(json, "\"chase_csv\"");

        let deserialized: FileFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, FileFormat::ChaseCsv);
    }
}
