//! `list` command
//!
//! Prints the filtered view as a table.

use crate::cli::FilterArgs;
use crate::display::{format_criteria, format_transaction_table};
use crate::error::TxFilterResult;
use crate::services::FilterPanel;

/// Handle the list command
pub fn handle_list_command(mut panel: FilterPanel, args: &FilterArgs) -> TxFilterResult<()> {
    args.apply_to(&mut panel);

    print!("{}", format_transaction_table(panel.view()));
    println!(
        "{} of {} transactions ({})",
        panel.view().len(),
        panel.dataset().len(),
        format_criteria(panel.criteria())
    );

    Ok(())
}
