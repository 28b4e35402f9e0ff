//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use fintrack_shared::types::TransactionId;
use rust_decimal::Decimal;

/// Fintrack - track income and expenses in your local currency
#[derive(Debug, Parser)]
#[command(name = "fintrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Money in
    #[value(alias = "in")]
    Income,
    /// Money out
    #[value(alias = "out")]
    Expense,
}

impl Kind {
    pub const fn is_income(self) -> bool {
        matches!(self, Self::Income)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Tier, currency and balance
    Status,

    /// Record a transaction
    Add {
        /// Free-text label
        title: String,
        /// Amount in the local currency
        amount: Decimal,
        /// income or expense
        #[arg(value_enum, ignore_case = true)]
        kind: Kind,
    },

    /// Replace the title, amount and kind of a transaction
    Edit {
        /// Transaction id as shown by `list`
        id: TransactionId,
        /// New label
        title: String,
        /// New amount in the local currency
        amount: Decimal,
        /// income or expense
        #[arg(value_enum, ignore_case = true)]
        kind: Kind,
    },

    /// Delete a transaction
    Delete {
        /// Transaction id as shown by `list`
        id: TransactionId,
    },

    /// Delete every transaction of the active profile
    Clear,

    /// List transactions, newest first
    List,

    /// Monthly totals and top expenses
    Report,

    /// Write transactions as CSV to stdout
    Export,

    /// Buy the Pro version
    Upgrade,

    /// Restore purchases
    Restore,

    /// List saved profiles
    Profiles,

    /// Create a profile
    #[command(name = "profile-add")]
    AddProfile {
        /// Display name
        name: String,
        /// Avatar emoji
        #[arg(default_value = "👤")]
        emoji: String,
    },

    /// Switch the active profile
    Use {
        /// Profile id or name
        profile: String,
    },

    /// Delete a profile and its transactions
    #[command(name = "profile-delete")]
    DeleteProfile {
        /// Profile id or name
        profile: String,
    },
}
