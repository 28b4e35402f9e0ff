//! Balances, monthly reports, and the expense breakdown chart data.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::Transaction;

/// Adds amounts, clamping at the `Decimal` bounds instead of overflowing.
fn saturating_total(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of all income, in USD.
#[must_use]
pub fn total_income(transactions: &[Transaction]) -> Decimal {
    saturating_total(
        transactions
            .iter()
            .filter(|t| t.is_income)
            .map(|t| t.amount_usd),
    )
}

/// Sum of all expenses, in USD.
#[must_use]
pub fn total_expenses(transactions: &[Transaction]) -> Decimal {
    saturating_total(
        transactions
            .iter()
            .filter(|t| !t.is_income)
            .map(|t| t.amount_usd),
    )
}

/// Income minus expenses, in USD. Zero for an empty slice.
///
/// Totals saturate at the `Decimal` bounds, so stored data can never make
/// this panic.
#[must_use]
pub fn balance(transactions: &[Transaction]) -> Decimal {
    total_income(transactions).saturating_sub(total_expenses(transactions))
}

/// A calendar month (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
}

impl MonthKey {
    /// Month containing `date`.
    #[must_use]
    pub fn of(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Income and expenses for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// The month.
    pub month: MonthKey,
    /// Total income in USD.
    pub income: Decimal,
    /// Total expenses in USD.
    pub expenses: Decimal,
}

impl MonthlySummary {
    /// Income minus expenses.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income.saturating_sub(self.expenses)
    }
}

/// Groups transactions by calendar month, newest month first.
#[must_use]
pub fn monthly_summaries(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();
    for transaction in transactions {
        let (income, expenses) = months.entry(MonthKey::of(&transaction.date)).or_default();
        if transaction.is_income {
            *income = income.saturating_add(transaction.amount_usd);
        } else {
            *expenses = expenses.saturating_add(transaction.amount_usd);
        }
    }

    months
        .into_iter()
        .rev()
        .map(|(month, (income, expenses))| MonthlySummary {
            month,
            income,
            expenses,
        })
        .collect()
}

/// Distinct months that have transactions, newest first.
#[must_use]
pub fn available_months(transactions: &[Transaction]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = transactions
        .iter()
        .map(|t| MonthKey::of(&t.date))
        .collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();
    months
}

/// Transactions dated within `month`, newest first.
#[must_use]
pub fn transactions_in_month(transactions: &[Transaction], month: MonthKey) -> Vec<&Transaction> {
    let mut selected: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| MonthKey::of(&t.date) == month)
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

/// One slice of the expense chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseShare<'a> {
    /// The expense.
    pub transaction: &'a Transaction,
    /// Share of total expenses, in percent with one decimal.
    pub percentage: Decimal,
}

/// Expenses sorted by amount (largest first) with their share of the total.
#[must_use]
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<ExpenseShare<'_>> {
    let total = total_expenses(transactions);
    let mut shares: Vec<ExpenseShare<'_>> = transactions
        .iter()
        .filter(|t| !t.is_income)
        .map(|transaction| ExpenseShare {
            transaction,
            percentage: if total.is_zero() {
                Decimal::ZERO
            } else {
                (transaction.amount_usd / total * Decimal::ONE_HUNDRED).round_dp(1)
            },
        })
        .collect();
    shares.sort_by(|a, b| b.transaction.amount_usd.cmp(&a.transaction.amount_usd));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn tx(title: &str, amount: Decimal, is_income: bool, date: DateTime<Utc>) -> Transaction {
        Transaction::new(title, amount, is_income, date)
    }

    #[test]
    fn test_balance_income_only() {
        let txs = vec![
            tx("Salary", dec!(1000), true, on(2025, 11, 1)),
            tx("Bonus", dec!(500), true, on(2025, 11, 2)),
        ];
        assert_eq!(balance(&txs), dec!(1500));
    }

    #[test]
    fn test_balance_expense_only() {
        let txs = vec![
            tx("Groceries", dec!(100), false, on(2025, 11, 1)),
            tx("Gas", dec!(50), false, on(2025, 11, 2)),
        ];
        assert_eq!(balance(&txs), dec!(-150));
    }

    #[test]
    fn test_balance_mixed() {
        let txs = vec![
            tx("Salary", dec!(1000), true, on(2025, 11, 1)),
            tx("Groceries", dec!(100), false, on(2025, 11, 2)),
        ];
        assert_eq!(balance(&txs), dec!(900));
        assert_eq!(total_income(&txs), dec!(1000));
        assert_eq!(total_expenses(&txs), dec!(100));
    }

    #[test]
    fn test_balance_empty() {
        assert_eq!(balance(&[]), Decimal::ZERO);
        assert!(monthly_summaries(&[]).is_empty());
        assert!(expense_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_monthly_summaries_newest_first() {
        let txs = vec![
            tx("Salary", dec!(2000), true, on(2025, 10, 1)),
            tx("Rent", dec!(800), false, on(2025, 10, 3)),
            tx("Salary", dec!(2100), true, on(2025, 11, 1)),
            tx("Groceries", dec!(120.50), false, on(2025, 11, 8)),
            tx("Gift", dec!(50), false, on(2024, 12, 24)),
        ];

        let summaries = monthly_summaries(&txs);
        let months: Vec<String> = summaries.iter().map(|s| s.month.to_string()).collect();
        assert_eq!(months, vec!["2025-11", "2025-10", "2024-12"]);

        assert_eq!(summaries[0].income, dec!(2100));
        assert_eq!(summaries[0].expenses, dec!(120.50));
        assert_eq!(summaries[0].net(), dec!(1979.50));
        assert_eq!(summaries[1].net(), dec!(1200));
        assert_eq!(summaries[2].income, Decimal::ZERO);
    }

    #[test]
    fn test_available_months_and_filter() {
        let txs = vec![
            tx("A", dec!(1), false, on(2025, 11, 1)),
            tx("B", dec!(2), false, on(2025, 11, 20)),
            tx("C", dec!(3), false, on(2025, 9, 5)),
        ];

        let months = available_months(&txs);
        assert_eq!(
            months,
            vec![
                MonthKey { year: 2025, month: 11 },
                MonthKey { year: 2025, month: 9 },
            ]
        );

        let november = transactions_in_month(&txs, months[0]);
        let titles: Vec<&str> = november.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_expense_breakdown() {
        let txs = vec![
            tx("Coffee", dec!(25), false, on(2025, 11, 1)),
            tx("Salary", dec!(3000), true, on(2025, 11, 1)),
            tx("Rent", dec!(75), false, on(2025, 11, 2)),
        ];

        let shares = expense_breakdown(&txs);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].transaction.title, "Rent");
        assert_eq!(shares[0].percentage, dec!(75.0));
        assert_eq!(shares[1].transaction.title, "Coffee");
        assert_eq!(shares[1].percentage, dec!(25.0));
    }

    #[test]
    fn test_expense_breakdown_rounds_to_one_decimal() {
        let txs = vec![
            tx("A", dec!(1), false, on(2025, 11, 1)),
            tx("B", dec!(2), false, on(2025, 11, 1)),
        ];
        let shares = expense_breakdown(&txs);
        assert_eq!(shares[0].percentage, dec!(66.7));
        assert_eq!(shares[1].percentage, dec!(33.3));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let txs = vec![
            tx("Jackpot", Decimal::MAX, true, on(2025, 11, 1)),
            tx("Jackpot", Decimal::MAX, true, on(2025, 11, 2)),
            tx("Yacht", Decimal::MAX, false, on(2025, 11, 3)),
            tx("Yacht", Decimal::MAX, false, on(2025, 11, 4)),
        ];

        assert_eq!(total_income(&txs), Decimal::MAX);
        assert_eq!(total_expenses(&txs), Decimal::MAX);
        assert_eq!(balance(&txs), Decimal::ZERO);
        assert_eq!(balance(&txs[..2]), Decimal::MAX);
        assert_eq!(balance(&txs[2..]), Decimal::MIN);

        let summaries = monthly_summaries(&txs);
        assert_eq!(summaries[0].income, Decimal::MAX);
        assert_eq!(summaries[0].net(), Decimal::ZERO);

        let shares = expense_breakdown(&txs);
        assert!(shares.iter().all(|s| s.percentage <= Decimal::ONE_HUNDRED));
    }

    #[test]
    fn test_expense_breakdown_zero_total() {
        let txs = vec![tx("Free", dec!(0), false, on(2025, 11, 1))];
        let shares = expense_breakdown(&txs);
        assert_eq!(shares[0].percentage, Decimal::ZERO);
    }
}
