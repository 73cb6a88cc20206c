#![doc(test(attr(deny(warnings))))]

//! Budget Ledger models spending categories as append-only ledgers and
//! renders fixed-width text reports and spend charts from them.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use config::ReportConfig;
pub use errors::{ChartError, ConfigError, LedgerError};
pub use ledger::{Category, LedgerEntry, NamedEntity, SpendSource};
pub use report::chart::{create_spend_chart, spend_percentages};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
