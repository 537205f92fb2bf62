use crate::types::Transaction;

/// Drops card payments, keeping every spend row in its original order.
pub fn filter_payments(transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.into_iter().filter(|txn| !txn.is_payment()).collect()
}
