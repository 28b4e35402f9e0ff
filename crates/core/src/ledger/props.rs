//! Property-based tests for ledger math.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::summary::{balance, expense_breakdown, monthly_summaries, total_expenses, total_income};
use super::transaction::Transaction;

/// Strategy to generate a transaction within 2024-2025.
fn transaction() -> impl Strategy<Value = Transaction> {
    (
        0i64..10_000_000i64,
        any::<bool>(),
        1_704_067_200i64..1_767_225_600i64,
    )
        .prop_map(|(cents, is_income, timestamp)| {
            let date = Utc.timestamp_opt(timestamp, 0).unwrap();
            Transaction::new("generated", Decimal::new(cents, 2), is_income, date)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance equals income minus expenses.
    #[test]
    fn prop_balance_is_income_minus_expenses(
        txs in prop::collection::vec(transaction(), 0..50),
    ) {
        prop_assert_eq!(balance(&txs), total_income(&txs) - total_expenses(&txs));
    }

    /// Monthly nets add up to the overall balance.
    #[test]
    fn prop_monthly_nets_sum_to_balance(
        txs in prop::collection::vec(transaction(), 0..50),
    ) {
        let summaries = monthly_summaries(&txs);
        let net: Decimal = summaries.iter().map(super::summary::MonthlySummary::net).sum();
        prop_assert_eq!(net, balance(&txs));
        prop_assert!(summaries.windows(2).all(|w| w[0].month > w[1].month));
    }

    /// Every expense appears exactly once in the breakdown, largest first.
    #[test]
    fn prop_breakdown_covers_expenses(
        txs in prop::collection::vec(transaction(), 0..50),
    ) {
        let shares = expense_breakdown(&txs);
        prop_assert_eq!(shares.len(), txs.iter().filter(|t| !t.is_income).count());
        prop_assert!(shares
            .windows(2)
            .all(|w| w[0].transaction.amount_usd >= w[1].transaction.amount_usd));
        prop_assert!(shares.iter().all(|s| s.percentage >= Decimal::ZERO
            && s.percentage <= Decimal::ONE_HUNDRED));
    }
}
