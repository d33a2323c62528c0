//! `export` command
//!
//! Writes the filtered view to a spreadsheet (or CSV) file.

use std::path::PathBuf;

use clap::Args;

use crate::cli::FilterArgs;
use crate::config::settings::Settings;
use crate::error::TxFilterResult;
use crate::export::{default_export_path, export_view, ExportFormat};
use crate::services::FilterPanel;

/// Arguments of the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output file path (defaults to the configured export file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (guessed from the output extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

/// Handle the export command
pub fn handle_export_command(
    mut panel: FilterPanel,
    settings: &Settings,
    args: ExportArgs,
) -> TxFilterResult<PathBuf> {
    args.filters.apply_to(&mut panel);

    let output = args
        .output
        .unwrap_or_else(|| default_export_path(settings));
    let format = args
        .format
        .unwrap_or_else(|| ExportFormat::from_path(&output));

    export_view(panel.view(), &output, format, settings)?;

    println!(
        "Exported {} transactions to: {}",
        panel.view().len(),
        output.display()
    );

    Ok(output)
}
