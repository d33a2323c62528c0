//! Filter flags shared by the CLI commands
//!
//! Flags are applied through the same panel setters as the TUI, so the same
//! coercion rules hold: unparseable dates and amounts mean "no constraint".

use clap::Args;

use crate::models::parse_user_date;
use crate::services::FilterPanel;

/// Filter criteria given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start of the date range (MM-DD-YYYY or YYYY-MM-DD); needs --to
    #[arg(long)]
    pub from: Option<String>,

    /// End of the date range (MM-DD-YYYY or YYYY-MM-DD); needs --from
    #[arg(long)]
    pub to: Option<String>,

    /// Case-insensitive payee name substring
    #[arg(short, long)]
    pub name: Option<String>,

    /// Minimum amount
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Maximum amount
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,
}

impl FilterArgs {
    /// Load the flags into the panel and recompute its view
    pub fn apply_to(&self, panel: &mut FilterPanel) {
        let start = self.from.as_deref().and_then(parse_date_flag);
        let end = self.to.as_deref().and_then(parse_date_flag);
        if start.is_some() != end.is_some() {
            log::warn!("date range needs both --from and --to; ignoring it");
        }
        panel.select_date_range([start, end]);

        if let Some(name) = &self.name {
            panel.set_name_pattern(name.as_str());
        }
        if let Some(min) = &self.min {
            panel.set_min_amount(min);
        }
        if let Some(max) = &self.max {
            panel.set_max_amount(max);
        }

        panel.apply_filter();
    }
}

fn parse_date_flag(s: &str) -> Option<chrono::NaiveDate> {
    let date = parse_user_date(s);
    if date.is_none() {
        log::warn!("ignoring unparseable date {:?}", s);
    }
    date
}
