//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO UI or storage-engine dependencies.
//! Persistence is reached only through the [`store::KeyValueStore`] port.
//!
//! # Modules
//!
//! - `currency` - Display currency, conversion from/to USD, formatting
//! - `entitlement` - Free/Pro tier gating of profiles and transactions
//! - `ledger` - Transactions, balances, monthly reports
//! - `profile` - Local user profiles
//! - `export` - CSV export
//! - `store` - Key-value storage port

pub mod currency;
pub mod entitlement;
pub mod export;
pub mod ledger;
pub mod profile;
pub mod store;

#[cfg(test)]
mod test_utils;
