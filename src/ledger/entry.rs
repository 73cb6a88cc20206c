use serde::Serialize;

/// A single signed movement recorded in a category ledger.
///
/// Positive amounts are deposits, negative amounts are withdrawals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    amount: f64,
    description: String,
}

impl LedgerEntry {
    pub(crate) fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}
