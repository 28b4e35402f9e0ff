//! Storage layer for Fintrack.
//!
//! Adapters implementing [`KeyValueStore`](fintrack_core::store::KeyValueStore)
//! plus repositories that keep transactions and profiles as JSON arrays
//! under fixed keys.

pub mod file;
pub mod memory;
pub mod repositories;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use repositories::{ProfileRepository, TransactionRepository};
