use rust_decimal::Decimal;
use serde::Deserialize;

use super::types::StatementDate;
use crate::errors::StatementParseError;
use crate::types::Transaction;

/// A statement row exactly as exported, one string per column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChaseTransactionRaw {
    #[serde(rename = "Transaction Date")]
    pub transaction_date: String,
    #[serde(rename = "Post Date")]
    pub post_date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Type")]
    pub trn_type: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Memo")]
    pub memo: String,
}

impl TryFrom<ChaseTransactionRaw> for Transaction {
    type Error = StatementParseError;

    fn try_from(raw: ChaseTransactionRaw) -> Result<Self, Self::Error> {
        let transaction_date = StatementDate::from(raw.transaction_date).try_into()?;
        let post_date = StatementDate::from(raw.post_date).try_into()?;

        let amount = raw
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| StatementParseError::MalformedAmount(raw.amount.clone()))?;

        Ok(Transaction {
            transaction_date,
            post_date,
            description: raw.description,
            category: raw.category.parse()?,
            transaction_type: raw.trn_type.parse()?,
            amount,
            memo: raw.memo,
        })
    }
}
