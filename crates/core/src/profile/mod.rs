//! Local user profiles and the storage keys derived from them.

use fintrack_shared::types::ProfileId;
use serde::{Deserialize, Serialize};

/// Key holding the JSON array of all profiles.
pub const PROFILES_KEY: &str = "SavedUsers";

/// Key holding transactions recorded before any profile existed.
pub const DEFAULT_TRANSACTIONS_KEY: &str = "SavedTransactions";

/// Key holding the id of the profile last switched to.
pub const ACTIVE_PROFILE_KEY: &str = "ActiveUser";

/// A locally stored user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier.
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// Avatar emoji.
    pub emoji: String,
    /// Optional photo bytes, stored as standard base64.
    #[serde(
        rename = "photoData",
        default,
        skip_serializing_if = "Option::is_none",
        with = "photo_base64"
    )]
    pub photo: Option<Vec<u8>>,
}

impl Profile {
    /// Creates a profile with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, photo: Option<Vec<u8>>) -> Self {
        Self {
            id: ProfileId::new(),
            name: name.into(),
            emoji: emoji.into(),
            photo,
        }
    }

    /// Key under which this profile's transactions are stored.
    #[must_use]
    pub fn transactions_key(&self) -> String {
        transactions_key(Some(&self.id))
    }
}

/// Storage key for a profile's transactions; `None` selects the shared key.
#[must_use]
pub fn transactions_key(profile: Option<&ProfileId>) -> String {
    match profile {
        Some(id) => format!(
            "{DEFAULT_TRANSACTIONS_KEY}_{}",
            id.into_inner().hyphenated().to_string().to_uppercase()
        ),
        None => DEFAULT_TRANSACTIONS_KEY.to_string(),
    }
}

mod photo_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        photo: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match photo {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .transpose()
    }
}
