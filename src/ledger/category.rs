use std::fmt;

use serde::Serialize;

use super::common::{NamedEntity, SpendSource};
use super::entry::LedgerEntry;
use crate::config::{ReportConfig, TOTAL_LABEL};
use crate::errors::LedgerError;

/// A named budget category backed by an append-only ledger.
///
/// Serialization is one-way: ledgers are only built through the validated
/// operations below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Creates a category with an empty ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order.
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Records an incoming amount.
    pub fn deposit(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        validate_amount(amount)?;
        self.append(amount, description.into());
        Ok(())
    }

    /// Records an outgoing amount when the balance covers it.
    ///
    /// Returns `Ok(false)` and leaves the ledger untouched on insufficient
    /// funds.
    pub fn withdraw(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<bool, LedgerError> {
        validate_amount(amount)?;
        if !self.check_funds(amount) {
            tracing::warn!(
                category = %self.name,
                amount,
                balance = self.balance(),
                "withdrawal rejected: insufficient funds"
            );
            return Ok(false);
        }
        self.append(-amount, description.into());
        Ok(true)
    }

    /// Signed sum of every ledger entry.
    pub fn balance(&self) -> f64 {
        self.ledger.iter().map(LedgerEntry::amount).sum()
    }

    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.balance()
    }

    /// Moves `amount` from this category into `other`.
    ///
    /// Both ledgers change or neither does; the funds check runs once.
    pub fn transfer(&mut self, amount: f64, other: &mut Category) -> Result<bool, LedgerError> {
        validate_amount(amount)?;
        if !self.check_funds(amount) {
            tracing::warn!(
                from = %self.name,
                to = %other.name,
                amount,
                "transfer rejected: insufficient funds"
            );
            return Ok(false);
        }
        self.append(-amount, format!("Transfer to {}", other.name));
        other.append(amount, format!("Transfer from {}", self.name));
        tracing::info!(from = %self.name, to = %other.name, amount, "transfer recorded");
        Ok(true)
    }

    /// Sum of all negative entries (zero when nothing was spent).
    pub fn withdrawals(&self) -> f64 {
        self.ledger
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .map(LedgerEntry::amount)
            .sum()
    }

    /// Renders the ledger report using a custom layout.
    pub fn render_with(&self, config: &ReportConfig) -> String {
        let mut lines = Vec::with_capacity(self.ledger.len() + 2);
        lines.push(center(&self.name, config.title_width, config.title_fill));

        let amount_format = config.amount_format();
        for entry in &self.ledger {
            let description: String = entry
                .description()
                .chars()
                .take(config.description_width)
                .collect();
            let amount_width = config
                .title_width
                .saturating_sub(description.chars().count());
            lines.push(format!(
                "{}{:>width$}",
                description,
                amount_format.format(entry.amount()),
                width = amount_width
            ));
        }

        lines.push(format!(
            "{}{:>width$}",
            TOTAL_LABEL,
            amount_format.format(self.balance()),
            width = config.total_width()
        ));
        lines.join("\n")
    }

    fn append(&mut self, amount: f64, description: String) {
        tracing::debug!(category = %self.name, amount, %description, "ledger entry appended");
        self.ledger.push(LedgerEntry::new(amount, description));
    }
}

fn validate_amount(amount: f64) -> Result<(), LedgerError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

/// Centers `text` in `width` columns, putting the odd fill column on the right.
fn center(text: &str, width: usize, fill: char) -> String {
    let padding = width.saturating_sub(text.chars().count());
    let left = padding / 2;
    let right = padding - left;
    let mut out = String::with_capacity(text.len() + padding);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&ReportConfig::default()))
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl SpendSource for Category {
    fn withdrawals(&self) -> f64 {
        Category::withdrawals(self)
    }
}
