//! CSV export
//!
//! Writes the filtered view with the same columns as the spreadsheet export.

use std::io::Write;

use super::xlsx::HEADERS;
use crate::error::TxFilterResult;
use crate::models::Transaction;

/// Export transactions to CSV
///
/// The header row is always written, even for an empty view.
pub fn export_transactions_csv<W: Write>(rows: &[Transaction], writer: W) -> TxFilterResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADERS)?;
    for txn in rows {
        wtr.serialize(txn)?;
    }
    wtr.flush()?;

    log::info!("exported {} rows as CSV", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;

    #[test]
    fn test_export_transactions_csv() {
        let data = Dataset::builtin();
        let mut output = Vec::new();
        export_transactions_csv(&data[8..], &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "date,name,amount\n03-15-2023,David Wilson,180.9\n03-21-2023,David Wilson,380.6\n"
        );
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "date,name,amount\n");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let txn = Transaction::from_iso("2023-01-01", "Doe, John", 1.5).unwrap();
        let mut output = Vec::new();
        export_transactions_csv(&[txn], &mut output).unwrap();
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("01-01-2023,\"Doe, John\",1.5"));
    }
}
