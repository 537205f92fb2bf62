use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StatementParseError;

/// Spend category assigned by the card issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Fees & Adjustments")]
    FeesAndAdjustments,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    #[serde(rename = "Gas")]
    Gas,
    #[serde(rename = "Gifts & Donations")]
    GiftsAndDonations,
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
    #[serde(rename = "Home")]
    Home,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl Category {
    /// Label as printed on the statement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::FeesAndAdjustments => "Fees & Adjustments",
            Category::FoodAndDrink => "Food & Drink",
            Category::Gas => "Gas",
            Category::GiftsAndDonations => "Gifts & Donations",
            Category::Groceries => "Groceries",
            Category::HealthAndWellness => "Health & Wellness",
            Category::Home => "Home",
            Category::ProfessionalServices => "Professional Services",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Uncategorized => "Uncategorized",
        }
    }

    /// Lookup key for a raw category: upper-cased, `&` spelled `AND`,
    /// spaces as underscores. Blank input maps to `UNCATEGORIZED`.
    pub fn normalize(raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return "UNCATEGORIZED".to_string();
        }

        trimmed.to_uppercase().replace('&', "AND").replace(' ', "_")
    }
}

impl FromStr for Category {
    type Err = StatementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match Category::normalize(s).as_str() {
            "BILLS_AND_UTILITIES" => Category::BillsAndUtilities,
            "EDUCATION" => Category::Education,
            "ENTERTAINMENT" => Category::Entertainment,
            "FEES_AND_ADJUSTMENTS" => Category::FeesAndAdjustments,
            "FOOD_AND_DRINK" => Category::FoodAndDrink,
            "GAS" => Category::Gas,
            "GIFTS_AND_DONATIONS" => Category::GiftsAndDonations,
            "GROCERIES" => Category::Groceries,
            "HEALTH_AND_WELLNESS" => Category::HealthAndWellness,
            "HOME" => Category::Home,
            "PROFESSIONAL_SERVICES" => Category::ProfessionalServices,
            "SHOPPING" => Category::Shopping,
            "TRAVEL" => Category::Travel,
            "UNCATEGORIZED" => Category::Uncategorized,
            _ => return Err(StatementParseError::UnknownCategory(s.to_string())),
        };

        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Adjustment,
    Fee,
    Payment,
    Refund,
    Return,
    Sale,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Adjustment => "Adjustment",
            TransactionType::Fee => "Fee",
            TransactionType::Payment => "Payment",
            TransactionType::Refund => "Refund",
            TransactionType::Return => "Return",
            TransactionType::Sale => "Sale",
        }
    }
}

impl FromStr for TransactionType {
    type Err = StatementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_uppercase().as_str() {
            "ADJUSTMENT" => TransactionType::Adjustment,
            "FEE" => TransactionType::Fee,
            "PAYMENT" => TransactionType::Payment,
            "REFUND" => TransactionType::Refund,
            "RETURN" => TransactionType::Return,
            "SALE" => TransactionType::Sale,
            _ => return Err(StatementParseError::UnknownTransactionType(s.to_string())),
        };

        Ok(kind)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One statement row, fully typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_date: NaiveDate,
    pub post_date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub memo: String,
}

impl Transaction {
    pub fn is_payment(&self) -> bool {
        self.transaction_type == TransactionType::Payment
    }

    /// Month bucket of the post date, e.g. `"Oct 22"`.
    pub fn month_label(&self) -> String {
        self.post_date.format("%b %y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn create_test_transaction() -> Transaction {
        Transaction {
            transaction_date: NaiveDate::from_ymd_opt(2022, 10, 7).unwrap(),
            post_date: NaiveDate::from_ymd_opt(2022, 10, 8).unwrap(),
            description: "Movie".to_string(),
            category: Category::Entertainment,
            transaction_type: TransactionType::Sale,
            amount: Decimal::from_str("-24.99").unwrap(),
            memo: String::new(),
        }
    }

    #[rstest]
    #[case("Bills & Utilities", Category::BillsAndUtilities)]
    #[case("Food & Drink", Category::FoodAndDrink)]
    #[case("food & drink", Category::FoodAndDrink)]
    #[case("Professional Services", Category::ProfessionalServices)]
    #[case("Gas", Category::Gas)]
    #[case("Uncategorized", Category::Uncategorized)]
    #[case("", Category::Uncategorized)]
    #[case("   ", Category::Uncategorized)]
    #[case("FOOD_AND_DRINK", Category::FoodAndDrink)]
    fn test_category_from_str(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("Restaurants")]
    #[case("Food and Drink & More")]
    #[case("Food-Drink")]
    fn test_category_unknown(#[case] raw: &str) {
        let result = Category::from_str(raw);
        assert!(matches!(result, Err(StatementParseError::UnknownCategory(ref v)) if v == raw));
    }

    #[rstest]
    #[case("Bills & Utilities", "BILLS_AND_UTILITIES")]
    #[case("Health & Wellness", "HEALTH_AND_WELLNESS")]
    #[case("", "UNCATEGORIZED")]
    fn test_category_normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(Category::normalize(raw), expected);
    }

    #[test]
    fn test_every_category_round_trips_through_its_label() {
        let categories = [
            Category::BillsAndUtilities,
            Category::Education,
            Category::Entertainment,
            Category::FeesAndAdjustments,
            Category::FoodAndDrink,
            Category::Gas,
            Category::GiftsAndDonations,
            Category::Groceries,
            Category::HealthAndWellness,
            Category::Home,
            Category::ProfessionalServices,
            Category::Shopping,
            Category::Travel,
            Category::Uncategorized,
        ];

        for category in categories {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[rstest]
    #[case("Sale", TransactionType::Sale)]
    #[case("PAYMENT", TransactionType::Payment)]
    #[case("return", TransactionType::Return)]
    #[case("Adjustment", TransactionType::Adjustment)]
    fn test_transaction_type_from_str(#[case] raw: &str, #[case] expected: TransactionType) {
        assert_eq!(TransactionType::from_str(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("Subscription")]
    #[case("")]
    fn test_transaction_type_unknown(#[case] raw: &str) {
        assert!(matches!(
            TransactionType::from_str(raw),
            Err(StatementParseError::UnknownTransactionType(_))
        ));
    }

    #[test]
    fn test_every_transaction_type_round_trips() {
        let kinds = [
            TransactionType::Adjustment,
            TransactionType::Fee,
            TransactionType::Payment,
            TransactionType::Refund,
            TransactionType::Return,
            TransactionType::Sale,
        ];

        for kind in kinds {
            assert_eq!(TransactionType::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_is_payment() {
        let mut txn = create_test_transaction();
        assert!(!txn.is_payment());

        txn.transaction_type = TransactionType::Payment;
        assert!(txn.is_payment());
    }

    #[rstest]
    #[case(2022, 10, 8, "Oct 22")]
    #[case(2021, 12, 15, "Dec 21")]
    #[case(2023, 1, 5, "Jan 23")]
    fn test_month_label(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let mut txn = create_test_transaction();
        txn.post_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(txn.month_label(), expected);
    }

    #[test]
    fn test_month_label_ignores_transaction_date() {
        let mut txn = create_test_transaction();
        txn.transaction_date = NaiveDate::from_ymd_opt(2022, 9, 30).unwrap();
        txn.post_date = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
        assert_eq!(txn.month_label(), "Oct 22");
    }

    #[test]
    fn test_transaction_serialization() {
        let transaction = create_test_transaction();

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("Entertainment"));
        assert!(json.contains("Sale"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, transaction);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::FoodAndDrink).unwrap();
        assert_eq!(json, "\"Food & Drink\"");
    }
}
