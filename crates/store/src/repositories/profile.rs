//! Saved user profiles.

use fintrack_core::profile::{ACTIVE_PROFILE_KEY, PROFILES_KEY, Profile};
use fintrack_core::store::{KeyValueStore, KeyValueStoreExt, StoreError};
use fintrack_shared::types::ProfileId;
use tracing::{debug, warn};

/// Profile repository.
#[derive(Debug, Clone)]
pub struct ProfileRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    /// Creates a new profile repository.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads all profiles. Missing or undecodable data yields an empty list.
    pub fn load(&self) -> Vec<Profile> {
        match self.store.get_json::<Vec<Profile>>(PROFILES_KEY) {
            Ok(profiles) => profiles.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable profiles");
                Vec::new()
            }
        }
    }

    /// Replaces the stored profile list.
    pub fn save(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        self.store.set_json(PROFILES_KEY, profiles)?;
        debug!(count = profiles.len(), "Saved profiles");
        Ok(())
    }

    /// Appends a profile and returns the new count.
    pub fn add(&self, profile: Profile) -> Result<usize, StoreError> {
        let mut profiles = self.load();
        profiles.push(profile);
        self.save(&profiles)?;
        Ok(profiles.len())
    }

    /// Finds a profile by id.
    pub fn find(&self, id: &ProfileId) -> Option<Profile> {
        self.load().into_iter().find(|p| p.id == *id)
    }

    /// Finds a profile by its id or, failing that, its name (case-insensitive).
    pub fn resolve(&self, reference: &str) -> Option<Profile> {
        let profiles = self.load();
        if let Ok(id) = reference.parse::<ProfileId>()
            && let Some(profile) = profiles.iter().find(|p| p.id == id)
        {
            return Some(profile.clone());
        }
        profiles
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(reference.trim()))
    }

    /// The profile last switched to, or the first saved one.
    pub fn active(&self) -> Option<Profile> {
        let profiles = self.load();
        let selected = match self.store.get_json::<ProfileId>(ACTIVE_PROFILE_KEY) {
            Ok(selected) => selected,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable active profile");
                None
            }
        };

        selected
            .and_then(|id| profiles.iter().find(|p| p.id == id).cloned())
            .or_else(|| profiles.into_iter().next())
    }

    /// Remembers `id` as the active profile.
    pub fn set_active(&self, id: &ProfileId) -> Result<(), StoreError> {
        self.store.set_json(ACTIVE_PROFILE_KEY, id)?;
        debug!(profile_id = %id, "Switched active profile");
        Ok(())
    }

    /// Deletes a profile together with its transactions.
    ///
    /// Returns whether the profile existed.
    pub fn delete(&self, id: &ProfileId) -> Result<bool, StoreError> {
        let mut profiles = self.load();
        let Some(index) = profiles.iter().position(|p| p.id == *id) else {
            return Ok(false);
        };
        let removed = profiles.remove(index);

        self.save(&profiles)?;
        self.store.remove(&removed.transactions_key())?;
        let active = self.store.get_json::<ProfileId>(ACTIVE_PROFILE_KEY);
        if matches!(active, Ok(Some(selected)) if selected == *id) {
            self.store.remove(ACTIVE_PROFILE_KEY)?;
        }
        debug!(profile_id = %id, "Deleted profile");
        Ok(true)
    }
}
