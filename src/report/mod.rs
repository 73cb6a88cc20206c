//! Text reports built from category ledgers.

pub mod chart;
