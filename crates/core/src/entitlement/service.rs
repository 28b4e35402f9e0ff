//! Entitlement service: the persisted Pro flag and the add-action gates.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use super::tier::{LimitCheck, Resource, Tier};
use crate::store::{KeyValueStore, KeyValueStoreExt};

/// Fixed key under which the Pro flag is persisted.
pub const PRO_FLAG_KEY: &str = "isPro";

/// Artificial round-trip time of the simulated purchase.
pub const DEFAULT_PURCHASE_DELAY: Duration = Duration::from_secs(1);

/// Tracks the Pro flag and decides whether profiles or transactions may be added.
///
/// Construct one per process and hand it to consumers by reference. Writes
/// take `&mut self`: the UI thread is the only writer. Persistence failures
/// are logged and treated as "flag absent".
pub struct EntitlementService<S> {
    store: Arc<S>,
    is_pro: Arc<watch::Sender<bool>>,
    purchase_delay: Duration,
}

impl<S: KeyValueStore> EntitlementService<S> {
    /// Creates the service, loading the persisted flag (absent = free).
    pub fn new(store: S) -> Self {
        let is_pro = read_pro_flag(&store);
        let (sender, _) = watch::channel(is_pro);
        info!(tier = %Tier::from_pro_flag(is_pro), "Entitlements loaded");

        Self {
            store: Arc::new(store),
            is_pro: Arc::new(sender),
            purchase_delay: DEFAULT_PURCHASE_DELAY,
        }
    }

    /// Overrides the simulated purchase delay.
    #[must_use]
    pub fn with_purchase_delay(mut self, delay: Duration) -> Self {
        self.purchase_delay = delay;
        self
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the Pro version is unlocked.
    pub fn is_pro(&self) -> bool {
        *self.is_pro.borrow()
    }

    /// Current subscription tier.
    pub fn tier(&self) -> Tier {
        Tier::from_pro_flag(self.is_pro())
    }

    /// Observes the Pro flag; receivers see every subsequent write.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.is_pro.subscribe()
    }

    /// Writes the Pro flag and persists it.
    ///
    /// A failed write is logged; the in-memory flag is updated regardless.
    pub fn set_pro(&mut self, is_pro: bool) {
        write_pro_flag(self.store.as_ref(), &self.is_pro, is_pro);
    }

    /// Whether another profile may be created.
    pub fn can_add_profile(&self, current_profile_count: usize) -> bool {
        self.tier().allows(Resource::Profiles, current_profile_count)
    }

    /// Whether another transaction may be recorded.
    pub fn can_add_transaction(&self, current_transaction_count: usize) -> bool {
        self.tier()
            .allows(Resource::Transactions, current_transaction_count)
    }

    /// Detailed profile gate, including the upgrade prompt when refused.
    pub fn check_profile_limit(&self, current_profile_count: usize) -> LimitCheck {
        LimitCheck::evaluate(self.tier(), Resource::Profiles, current_profile_count)
    }

    /// Detailed transaction gate, including the upgrade prompt when refused.
    pub fn check_transaction_limit(&self, current_transaction_count: usize) -> LimitCheck {
        LimitCheck::evaluate(
            self.tier(),
            Resource::Transactions,
            current_transaction_count,
        )
    }

    /// Upgrade prompt for the profile limit.
    pub fn profile_limit_message(&self) -> String {
        Resource::Profiles.limit_message()
    }

    /// Upgrade prompt for the transaction limit.
    pub fn transaction_limit_message(&self) -> String {
        Resource::Transactions.limit_message()
    }

    /// Simulates buying the Pro version.
    ///
    /// Waits for the purchase delay, then sets and persists the flag. The
    /// simulated purchase cannot fail. It runs on its own task, so dropping
    /// the returned future does not cancel it.
    pub async fn buy_pro_version(&mut self)
    where
        S: Send + Sync + 'static,
    {
        let store = Arc::clone(&self.store);
        let is_pro = Arc::clone(&self.is_pro);
        let delay = self.purchase_delay;
        info!(delay = ?delay, "Purchase started");

        let purchase = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            write_pro_flag(store.as_ref(), &is_pro, true);
            info!("Pro version purchased");
        });

        if let Err(e) = purchase.await {
            warn!(error = %e, "Purchase task did not complete");
        }
    }

    /// Re-reads the persisted flag into memory.
    pub fn restore_purchases(&mut self) {
        let is_pro = read_pro_flag(self.store.as_ref());
        self.is_pro.send_replace(is_pro);
        info!(tier = %Tier::from_pro_flag(is_pro), "Purchases restored");
    }
}

fn write_pro_flag<S>(store: &S, sender: &watch::Sender<bool>, is_pro: bool)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = store.set_bool(PRO_FLAG_KEY, is_pro) {
        warn!(error = %e, is_pro, "Failed to persist Pro flag");
    }
    sender.send_replace(is_pro);
}

fn read_pro_flag<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    match store.get_bool(PRO_FLAG_KEY) {
        Ok(flag) => flag.unwrap_or(false),
        Err(e) => {
            warn!(error = %e, "Failed to read Pro flag, assuming free tier");
            false
        }
    }
}
