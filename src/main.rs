use anyhow::Result;
use clap::{Parser, Subcommand};

use txfilter::cli::{handle_export_command, handle_list_command, ExportArgs, FilterArgs};
use txfilter::config::logging::{init_logging, LogTarget};
use txfilter::config::{Settings, TxFilterPaths};
use txfilter::export::default_export_path;
use txfilter::models::Dataset;
use txfilter::services::FilterPanel;

#[derive(Parser)]
#[command(
    name = "txfilter",
    version,
    about = "Filter bank transactions and export them to a spreadsheet",
    long_about = "txfilter shows a list of bank transactions that can be filtered by \
                  date range, payee name and amount range. The filtered results can \
                  be exported to filtered_data.xlsx."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive filter panel (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the filtered transactions
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Export the filtered transactions to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TxFilterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_logging(&paths, target, cli.verbose)?;

    let panel = FilterPanel::new(Dataset::builtin());

    match cli.command {
        None | Some(Commands::Tui) => {
            txfilter::tui::run_tui(&settings, panel, default_export_path(&settings))?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(panel, &args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(panel, &settings, args)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to: {}", paths.settings_file().display());
                println!();
            }
            println!("txfilter Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Export file: {}", default_export_path(&settings).display());
            println!("  Sheet name:  {}", settings.sheet_name);
            println!("  Tick rate:   {} ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
