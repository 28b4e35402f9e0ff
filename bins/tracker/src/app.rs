//! Command execution against the configured store.

use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use fintrack_core::currency::CurrencyService;
use fintrack_core::entitlement::EntitlementService;
use fintrack_core::export::export_csv;
use fintrack_core::ledger::{
    LedgerError, NewTransaction, balance, expense_breakdown, monthly_summaries,
};
use fintrack_core::profile::Profile;
use fintrack_core::store::KeyValueStore;
use fintrack_shared::AppError;
use fintrack_shared::types::{LocaleTag, ProfileId, TransactionId};
use fintrack_store::{ProfileRepository, TransactionRepository};
use rust_decimal::Decimal;
use tracing::info;

use crate::cli::{Command, Kind};

/// Number of expenses shown under the monthly report.
const TOP_EXPENSES: usize = 5;

/// Services wired over one store.
pub struct Tracker<S> {
    locale: LocaleTag,
    currency: CurrencyService,
    entitlements: EntitlementService<S>,
    profiles: ProfileRepository<S>,
    transactions: TransactionRepository<S>,
}

impl<S> Tracker<S>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: S, locale: LocaleTag, purchase_delay: Duration) -> Self {
        Self {
            locale,
            currency: CurrencyService::default(),
            entitlements: EntitlementService::new(store.clone())
                .with_purchase_delay(purchase_delay),
            profiles: ProfileRepository::new(store.clone()),
            transactions: TransactionRepository::new(store),
        }
    }

    /// Runs one command, writing human-readable output to `out`.
    pub async fn run(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
        match command {
            Command::Status => self.status(out),
            Command::Add {
                title,
                amount,
                kind,
            } => self.add(title, amount, kind, out),
            Command::Edit {
                id,
                title,
                amount,
                kind,
            } => self.edit(id, title, amount, kind, out),
            Command::Delete { id } => {
                if !self.transactions.remove(self.active_profile().as_ref(), id)? {
                    return Err(AppError::from(LedgerError::NotFound(id)).into());
                }
                writeln!(out, "Deleted transaction {id}")?;
                Ok(())
            }
            Command::Clear => {
                self.transactions.clear(self.active_profile().as_ref())?;
                writeln!(out, "All transactions deleted.")?;
                Ok(())
            }
            Command::List => self.list(out),
            Command::Report => self.report(out),
            Command::Export => {
                let csv = export_csv(&self.transactions.load(self.active_profile().as_ref()))?;
                write!(out, "{csv}")?;
                Ok(())
            }
            Command::Upgrade => self.upgrade(out).await,
            Command::Restore => {
                self.entitlements.restore_purchases();
                writeln!(out, "Purchases restored. Tier: {}", self.entitlements.tier())?;
                Ok(())
            }
            Command::Profiles => self.list_profiles(out),
            Command::AddProfile { name, emoji } => self.add_profile(&name, emoji, out),
            Command::Use { profile } => {
                let profile = self.resolve_profile(&profile)?;
                self.profiles.set_active(&profile.id)?;
                writeln!(out, "Switched to {} {}", profile.emoji, profile.name)?;
                Ok(())
            }
            Command::DeleteProfile { profile } => {
                let profile = self.resolve_profile(&profile)?;
                self.profiles.delete(&profile.id)?;
                writeln!(out, "Deleted profile {} {}", profile.emoji, profile.name)?;
                Ok(())
            }
        }
    }

    /// Selected profile; transactions fall back to the shared key without one.
    fn active_profile(&self) -> Option<ProfileId> {
        self.profiles.active().map(|p| p.id)
    }

    fn resolve_profile(&self, reference: &str) -> Result<Profile, AppError> {
        self.profiles
            .resolve(reference)
            .ok_or_else(|| AppError::NotFound(format!("Profile not found: {reference}")))
    }

    fn money(&self, amount_usd: Decimal) -> String {
        self.currency.display_amount(amount_usd, &self.locale)
    }

    fn status(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let transactions = self.transactions.load(self.active_profile().as_ref());
        let check = self.entitlements.check_transaction_limit(transactions.len());

        writeln!(out, "Tier:         {}", self.entitlements.tier())?;
        if let Some(profile) = self.profiles.active() {
            writeln!(out, "Profile:      {} {}", profile.emoji, profile.name)?;
        }
        writeln!(
            out,
            "Currency:     {} ({})",
            self.currency.current_currency_code(&self.locale),
            self.currency.currency_symbol(&self.locale)
        )?;
        writeln!(out, "Rate:         {}", self.currency.exchange_rate_info(&self.locale))?;
        writeln!(out, "Balance:      {}", self.money(balance(&transactions)))?;
        match check.limit {
            Some(limit) => writeln!(out, "Transactions: {}/{limit}", check.current)?,
            None => writeln!(out, "Transactions: {}", check.current)?,
        }
        Ok(())
    }

    fn add(
        &self,
        title: String,
        amount: Decimal,
        kind: Kind,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let profile = self.active_profile();
        let count = self.transactions.load(profile.as_ref()).len();
        self.entitlements
            .check_transaction_limit(count)
            .ensure_allowed()?;

        let transaction = NewTransaction {
            title,
            amount_local: amount,
            is_income: kind.is_income(),
            date: Utc::now(),
        }
        .into_transaction(&self.currency, &self.locale)?;
        let summary = format!(
            "Added {} {} \"{}\" ({})",
            transaction.kind(),
            transaction.formatted_amount(&self.currency, &self.locale),
            transaction.title,
            transaction.id
        );

        self.transactions.add(profile.as_ref(), transaction)?;
        writeln!(out, "{summary}")?;
        Ok(())
    }

    fn edit(
        &self,
        id: TransactionId,
        title: String,
        amount: Decimal,
        kind: Kind,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let profile = self.active_profile();
        let date = self
            .transactions
            .load(profile.as_ref())
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.date)
            .ok_or(LedgerError::NotFound(id))?;

        let edit = NewTransaction {
            title,
            amount_local: amount,
            is_income: kind.is_income(),
            date,
        };
        let updated =
            self.transactions
                .update(profile.as_ref(), id, edit, &self.currency, &self.locale)?;

        writeln!(
            out,
            "Updated {} {} \"{}\"",
            updated.kind(),
            updated.formatted_amount(&self.currency, &self.locale),
            updated.title
        )?;
        Ok(())
    }

    fn list(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let mut transactions = self.transactions.load(self.active_profile().as_ref());
        if transactions.is_empty() {
            writeln!(out, "No transactions yet.")?;
            return Ok(());
        }

        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        for t in &transactions {
            writeln!(
                out,
                "{}  {}  {:<7}  {:>14}  {}",
                t.id,
                t.date.format("%Y-%m-%d"),
                t.kind(),
                t.formatted_amount(&self.currency, &self.locale),
                t.title
            )?;
        }
        Ok(())
    }

    fn report(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let transactions = self.transactions.load(self.active_profile().as_ref());
        if transactions.is_empty() {
            writeln!(out, "No transactions yet.")?;
            return Ok(());
        }

        for summary in monthly_summaries(&transactions) {
            writeln!(
                out,
                "{}  income {}  expenses {}  net {}",
                summary.month,
                self.money(summary.income),
                self.money(summary.expenses),
                self.money(summary.net())
            )?;
        }

        let shares = expense_breakdown(&transactions);
        if !shares.is_empty() {
            writeln!(out, "\nTop expenses:")?;
            for share in shares.iter().take(TOP_EXPENSES) {
                writeln!(
                    out,
                    "  {:>5}%  {}  {}",
                    share.percentage.to_string(),
                    self.money(share.transaction.amount_usd),
                    share.transaction.title
                )?;
            }
        }
        Ok(())
    }

    async fn upgrade(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.entitlements.is_pro() {
            writeln!(out, "Already on Pro.")?;
            return Ok(());
        }

        writeln!(out, "Processing purchase...")?;
        self.entitlements.buy_pro_version().await;
        info!("Upgrade finished");
        writeln!(out, "Welcome to Pro! All limits removed.")?;
        Ok(())
    }

    fn list_profiles(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let profiles = self.profiles.load();
        if profiles.is_empty() {
            writeln!(out, "No profiles yet.")?;
        }
        let active = self.active_profile();
        for profile in &profiles {
            let marker = if Some(profile.id) == active { '*' } else { ' ' };
            writeln!(
                out,
                "{marker} {} {}  ({})",
                profile.emoji, profile.name, profile.id
            )?;
        }
        Ok(())
    }

    fn add_profile(&self, name: &str, emoji: String, out: &mut impl Write) -> anyhow::Result<()> {
        let count = self.profiles.load().len();
        self.entitlements
            .check_profile_limit(count)
            .ensure_allowed()?;

        let profile = Profile::new(name.trim(), emoji, None);
        let summary = format!("Created profile {} {}", profile.emoji, profile.name);

        self.profiles.add(profile)?;
        writeln!(out, "{summary}")?;
        Ok(())
    }
}
