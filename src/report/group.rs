use crate::types::{Category, Transaction};

/// Transactions partitioned by key, keys kept in order of first appearance.
///
/// Backed by a plain vector of `(key, members)` pairs: a sorted or hashed map
/// would reorder the monthly report.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<'a, K> {
    groups: Vec<(K, Vec<&'a Transaction>)>,
}

impl<'a, K: PartialEq> Grouped<'a, K> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Appends to the group for `key`, opening a new group at the end if absent.
    pub fn push(&mut self, key: K, transaction: &'a Transaction) {
        match self.groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(transaction),
            None => self.groups.push((key, vec![transaction])),
        }
    }

    #[cfg(test)]
    fn get(&self, key: &K) -> Option<&[&'a Transaction]> {
        self.groups
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, members)| members.as_slice())
    }

    #[cfg(test)]
    fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a Transaction])> {
        self.groups.iter().map(|(key, members)| (key, members.as_slice()))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K: PartialEq> Default for Grouped<'_, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> IntoIterator for Grouped<'a, K> {
    type Item = (K, Vec<&'a Transaction>);
    type IntoIter = std::vec::IntoIter<(K, Vec<&'a Transaction>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

pub fn group_by_category<'a, I>(transactions: I) -> Grouped<'a, Category>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut grouped = Grouped::new();
    for txn in transactions {
        grouped.push(txn.category, txn);
    }
    grouped
}

/// Groups on the post date's month label, never the transaction date.
pub fn group_by_month<'a, I>(transactions: I) -> Grouped<'a, String>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut grouped = Grouped::new();
    for txn in transactions {
        grouped.push(txn.month_label(), txn);
    }
    grouped
}
