//! Subscription tiers and their resource limits.

use fintrack_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum number of profiles on the free tier.
pub const FREE_PROFILE_LIMIT: usize = 1;

/// Maximum number of transactions on the free tier.
pub const FREE_TRANSACTION_LIMIT: usize = 5;

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Free tier with counted limits.
    #[default]
    Free,
    /// Paid tier without limits.
    Pro,
}

/// Resource types that have limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Local user profiles.
    Profiles,
    /// Recorded transactions.
    Transactions,
}

impl Tier {
    /// Tier for a persisted Pro flag.
    #[must_use]
    pub const fn from_pro_flag(is_pro: bool) -> Self {
        if is_pro { Self::Pro } else { Self::Free }
    }

    /// Maximum count for `resource` (`None` = unlimited).
    #[must_use]
    pub const fn limit(self, resource: Resource) -> Option<usize> {
        match (self, resource) {
            (Self::Pro, _) => None,
            (Self::Free, Resource::Profiles) => Some(FREE_PROFILE_LIMIT),
            (Self::Free, Resource::Transactions) => Some(FREE_TRANSACTION_LIMIT),
        }
    }

    /// Whether one more `resource` may be added given the current count.
    #[must_use]
    pub fn allows(self, resource: Resource, current: usize) -> bool {
        self.limit(resource).is_none_or(|limit| current < limit)
    }
}

impl Resource {
    /// Upgrade prompt shown when the free limit for this resource is reached.
    #[must_use]
    pub fn limit_message(self) -> String {
        match self {
            Self::Profiles => format!(
                "Free version allows {FREE_PROFILE_LIMIT} user profile. \
                 Upgrade to Pro for unlimited profiles!"
            ),
            Self::Transactions => format!(
                "Free version allows {FREE_TRANSACTION_LIMIT} transactions. \
                 Upgrade to Pro for unlimited transactions!"
            ),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Pro => write!(f, "Pro"),
        }
    }
}

/// Result of a limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitCheck {
    /// Whether the operation is allowed.
    pub allowed: bool,
    /// Current usage count.
    pub current: usize,
    /// Maximum limit (None = unlimited).
    pub limit: Option<usize>,
    /// Human-readable message if limit exceeded.
    pub message: Option<String>,
}

impl LimitCheck {
    /// Evaluates `resource` at `current` usage for `tier`.
    #[must_use]
    pub fn evaluate(tier: Tier, resource: Resource, current: usize) -> Self {
        let allowed = tier.allows(resource, current);
        Self {
            allowed,
            current,
            limit: tier.limit(resource),
            message: (!allowed).then(|| resource.limit_message()),
        }
    }

    /// Fails with `AppError::BusinessRule` carrying the upgrade prompt when
    /// the check refused the action.
    pub fn ensure_allowed(&self) -> AppResult<()> {
        match (&self.message, self.allowed) {
            (_, true) => Ok(()),
            (Some(message), false) => Err(AppError::BusinessRule(message.clone())),
            (None, false) => Err(AppError::BusinessRule(format!(
                "limit of {} reached",
                self.limit.unwrap_or(self.current)
            ))),
        }
    }
}
