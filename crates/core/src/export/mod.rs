//! CSV export of transactions.

use chrono::Datelike;
use rust_decimal::RoundingStrategy;
use thiserror::Error;

use crate::ledger::Transaction;

/// Header row of every export.
pub const CSV_HEADER: [&str; 4] = ["Title", "Amount", "Type", "Date"];

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// The encoded bytes were not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The in-memory buffer could not be recovered from the writer.
    #[error("CSV buffer unavailable: {0}")]
    Buffer(String),
}

/// Renders transactions as CSV: `Title,Amount,Type,Date`.
///
/// Amounts are the stored USD values with two decimals; dates use the short
/// `M/D/YY` style. An empty slice yields just the header line.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_csv(transactions: &[Transaction]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for transaction in transactions {
        let mut amount = transaction
            .amount_usd
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        amount.rescale(2);

        let amount = amount.to_string();
        let kind = transaction.kind().to_string();
        let date = short_date(transaction);

        writer.write_record([
            transaction.title.as_str(),
            amount.as_str(),
            kind.as_str(),
            date.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn short_date(transaction: &Transaction) -> String {
    let date = transaction.date;
    format!(
        "{}/{}/{:02}",
        date.month(),
        date.day(),
        date.year().rem_euclid(100)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_export_has_header() {
        let csv = export_csv(&[]).unwrap();
        assert!(!csv.is_empty());

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["Title,Amount,Type,Date"]);
    }

    #[test]
    fn test_export_rows() {
        let txs = vec![
            Transaction::new(
                "Salary",
                dec!(2000),
                true,
                Utc.with_ymd_and_hms(2025, 12, 1, 8, 0, 0).unwrap(),
            ),
            Transaction::new(
                "Groceries",
                dec!(50.456),
                false,
                Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap(),
            ),
        ];

        let csv = export_csv(&txs).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Title,Amount,Type,Date");
        assert_eq!(lines[1], "Salary,2000.00,Income,12/1/25");
        assert_eq!(lines[2], "Groceries,50.46,Expense,1/5/26");
    }

    #[test]
    fn test_export_quotes_commas() {
        let txs = vec![Transaction::new(
            "Dinner, drinks",
            dec!(80),
            false,
            Utc.with_ymd_and_hms(2025, 11, 30, 20, 0, 0).unwrap(),
        )];

        let csv = export_csv(&txs).unwrap();
        assert_eq!(
            csv.lines().nth(1),
            Some("\"Dinner, drinks\",80.00,Expense,11/30/25")
        );
    }
}
