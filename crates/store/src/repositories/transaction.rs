//! Per-profile transaction lists.

use fintrack_core::currency::CurrencyService;
use fintrack_core::ledger::{LedgerError, NewTransaction, Transaction};
use fintrack_core::profile::transactions_key;
use fintrack_core::store::{KeyValueStore, KeyValueStoreExt, StoreError};
use fintrack_shared::AppError;
use fintrack_shared::types::{LocaleTag, ProfileId, TransactionId};
use tracing::{debug, warn};

/// Transaction repository. `None` as the profile selects the shared list.
#[derive(Debug, Clone)]
pub struct TransactionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> TransactionRepository<S> {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the transactions of a profile, in stored order.
    ///
    /// Missing or undecodable data yields an empty list.
    pub fn load(&self, profile: Option<&ProfileId>) -> Vec<Transaction> {
        let key = transactions_key(profile);
        match self.store.get_json::<Vec<Transaction>>(&key) {
            Ok(transactions) => transactions.unwrap_or_default(),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding unreadable transactions");
                Vec::new()
            }
        }
    }

    /// Replaces the stored list of a profile.
    pub fn save(
        &self,
        profile: Option<&ProfileId>,
        transactions: &[Transaction],
    ) -> Result<(), StoreError> {
        let key = transactions_key(profile);
        self.store.set_json(&key, transactions)?;
        debug!(key = %key, count = transactions.len(), "Saved transactions");
        Ok(())
    }

    /// Appends a transaction and returns the new count.
    pub fn add(
        &self,
        profile: Option<&ProfileId>,
        transaction: Transaction,
    ) -> Result<usize, StoreError> {
        let mut transactions = self.load(profile);
        transactions.push(transaction);
        self.save(profile, &transactions)?;
        Ok(transactions.len())
    }

    /// Applies an edit to the transaction with `id` and returns the result.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such transaction exists, a validation error
    /// if the edit is invalid, or a storage error if saving fails.
    pub fn update(
        &self,
        profile: Option<&ProfileId>,
        id: TransactionId,
        edit: NewTransaction,
        currency: &CurrencyService,
        locale: &LocaleTag,
    ) -> Result<Transaction, AppError> {
        let mut transactions = self.load(profile);
        let target = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        target.apply_edit(edit, currency, locale)?;
        let updated = target.clone();

        self.save(profile, &transactions)?;
        Ok(updated)
    }

    /// Removes the transaction with `id`. Returns whether it existed.
    pub fn remove(
        &self,
        profile: Option<&ProfileId>,
        id: TransactionId,
    ) -> Result<bool, StoreError> {
        let mut transactions = self.load(profile);
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Ok(false);
        }
        self.save(profile, &transactions)?;
        Ok(true)
    }

    /// Drops the whole list of a profile.
    pub fn clear(&self, profile: Option<&ProfileId>) -> Result<(), StoreError> {
        self.store.remove(&transactions_key(profile))
    }
}
