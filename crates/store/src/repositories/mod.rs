//! Repositories over a [`KeyValueStore`](fintrack_core::store::KeyValueStore).
//!
//! Collections are stored whole, as JSON arrays, under one key each. A value
//! that fails to decode is logged and read back as an empty collection.

pub mod profile;
pub mod transaction;

pub use profile::ProfileRepository;
pub use transaction::TransactionRepository;
