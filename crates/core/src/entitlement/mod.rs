//! Freemium entitlement gating.
//!
//! A single Pro flag, persisted through a [`KeyValueStore`](crate::store::KeyValueStore),
//! lifts the free-tier limits on profiles and transactions.

pub mod service;
pub mod tier;

pub use service::{DEFAULT_PURCHASE_DELAY, EntitlementService, PRO_FLAG_KEY};
pub use tier::{FREE_PROFILE_LIMIT, FREE_TRANSACTION_LIMIT, LimitCheck, Resource, Tier};
