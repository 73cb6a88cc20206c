//! Ledger domain models: categories and the entries they record.

pub mod category;
pub mod common;
pub mod entry;

pub use category::Category;
pub use common::{NamedEntity, SpendSource};
pub use entry::LedgerEntry;
