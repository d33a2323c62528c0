//! Spreadsheet export
//!
//! Writes the filtered view to a single-sheet `.xlsx` workbook with a
//! `date | name | amount` header row.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::TxFilterResult;
use crate::models::Transaction;

/// Default workbook file name
pub const DEFAULT_FILE_NAME: &str = "filtered_data.xlsx";

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Filtered Data";

/// Column headers, in field order
pub const HEADERS: [&str; 3] = ["date", "name", "amount"];

/// Build the workbook in memory
pub fn build_workbook(rows: &[Transaction], sheet_name: &str) -> TxFilterResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    write_rows(worksheet, rows)?;
    Ok(workbook)
}

/// Write the rows to an `.xlsx` file at `path`
///
/// An empty slice still produces a valid workbook holding only the header.
pub fn export_xlsx(rows: &[Transaction], path: &Path, sheet_name: &str) -> TxFilterResult<()> {
    let mut workbook = build_workbook(rows, sheet_name)?;
    workbook.save(path)?;
    log::info!("exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Render the workbook to bytes without touching the filesystem
pub fn export_xlsx_to_buffer(rows: &[Transaction], sheet_name: &str) -> TxFilterResult<Vec<u8>> {
    let mut workbook = build_workbook(rows, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Transaction]) -> TxFilterResult<()> {
    let header_format = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, txn) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, txn.display_date())?;
        worksheet.write_string(row, 1, txn.name.as_str())?;
        worksheet.write_number(row, 2, txn.amount)?;
    }

    worksheet.set_column_width(0, 12)?;
    worksheet.set_column_width(1, 20)?;

    Ok(())
}
