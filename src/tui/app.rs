//! Application state for the TUI
//!
//! The App struct holds the filter panel plus everything the screen needs
//! that isn't filter state: input widgets, focus, dialogs, notifications.

use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::export::{self, ExportFormat};
use crate::services::FilterPanel;

use super::dialogs::date_range::DateRangeState;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which filter control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    DateRange,
    Name,
    MinAmount,
    MaxAmount,
}

impl FilterField {
    /// The next control, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::DateRange => Self::Name,
            Self::Name => Self::MinAmount,
            Self::MinAmount => Self::MaxAmount,
            Self::MaxAmount => Self::DateRange,
        }
    }

    /// The previous control, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::DateRange => Self::MaxAmount,
            Self::Name => Self::DateRange,
            Self::MinAmount => Self::Name,
            Self::MaxAmount => Self::MinAmount,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    DateRange,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Filter criteria and the filtered view
    pub panel: FilterPanel,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Focused filter control
    pub focused_field: FilterField,

    /// Payee name input
    pub name_input: TextInput,

    /// Minimum amount input
    pub min_input: TextInput,

    /// Maximum amount input
    pub max_input: TextInput,

    /// Date range dialog state
    pub date_range_state: DateRangeState,

    /// Selected row in the results table
    pub selected_index: usize,

    /// Pending toast notifications
    pub notifications: NotificationQueue,

    /// Where the export action writes
    pub export_path: PathBuf,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, panel: FilterPanel, export_path: PathBuf) -> Self {
        Self {
            settings,
            panel,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            focused_field: FilterField::default(),
            name_input: TextInput::new().label("Name").placeholder("Filter by name"),
            min_input: TextInput::new().label("Min").placeholder("any"),
            max_input: TextInput::new().label("Max").placeholder("any"),
            date_range_state: DateRangeState::new(),
            selected_index: 0,
            notifications: NotificationQueue::new(),
            export_path,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::DateRange {
            self.date_range_state = DateRangeState::from_criteria(self.panel.criteria());
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Start editing the focused control
    pub fn start_editing(&mut self) {
        if self.focused_field == FilterField::DateRange {
            self.open_dialog(ActiveDialog::DateRange);
        } else {
            self.input_mode = InputMode::Editing;
        }
    }

    /// Leave editing mode
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// The text input behind the focused control, if it is one
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FilterField::DateRange => None,
            FilterField::Name => Some(&mut self.name_input),
            FilterField::MinAmount => Some(&mut self.min_input),
            FilterField::MaxAmount => Some(&mut self.max_input),
        }
    }

    /// Push the focused input's text into the criteria
    pub fn sync_focused_input(&mut self) {
        match self.focused_field {
            FilterField::DateRange => {}
            FilterField::Name => self.panel.set_name_pattern(self.name_input.value()),
            FilterField::MinAmount => self.panel.set_min_amount(self.min_input.value()),
            FilterField::MaxAmount => self.panel.set_max_amount(self.max_input.value()),
        }
    }

    /// Commit the date range dialog as one selection
    pub fn commit_date_range(&mut self) {
        let selection = self.date_range_state.selection();
        self.panel.select_date_range(selection);
        self.close_dialog();
    }

    /// Recompute the filtered view
    pub fn apply_filter(&mut self) {
        let shown = self.panel.apply_filter().len();
        self.selected_index = 0;
        let message = format!("Showing {} of {} transactions", shown, self.panel.dataset().len());
        self.notify(Notification::info(message));
    }

    /// Reset all criteria, the input controls, and the view
    pub fn clear_all(&mut self) {
        self.panel.clear_all();
        self.name_input.clear();
        self.min_input.clear();
        self.max_input.clear();
        self.date_range_state = DateRangeState::new();
        self.selected_index = 0;
        self.notify(Notification::info("Filters cleared"));
    }

    /// Write the filtered view to the export path
    pub fn export(&mut self) {
        let format = ExportFormat::from_path(&self.export_path);
        match export::export_view(self.panel.view(), &self.export_path, format, self.settings) {
            Ok(()) => {
                let message = format!(
                    "Exported {} rows to {}",
                    self.panel.view().len(),
                    self.export_path.display()
                );
                self.notify(Notification::success(message));
            }
            Err(e) => {
                log::error!("export failed: {}", e);
                self.notify(Notification::error(e.to_string()).with_duration(5));
            }
        }
    }

    /// Move selection up in the results table
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the results table
    pub fn move_down(&mut self) {
        let max = self.panel.view().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::NotificationType;
    use tempfile::TempDir;

    #[test]
    fn test_field_cycle() {
        let mut field = FilterField::DateRange;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FilterField::DateRange);
        assert_eq!(FilterField::DateRange.prev(), FilterField::MaxAmount);
    }

    #[test]
    fn test_clear_all_resets_inputs() {
        let settings = Settings::default();
        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("x.xlsx"));
        app.name_input = app.name_input.clone().content("david");
        app.focused_field = FilterField::Name;
        app.sync_focused_input();
        app.apply_filter();
        assert_eq!(app.panel.view().len(), 2);

        app.clear_all();
        assert_eq!(app.name_input.value(), "");
        assert_eq!(app.panel.view().len(), 10);
    }

    #[test]
    fn test_filter_and_clear_show_info_toasts() {
        let settings = Settings::default();
        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("x.xlsx"));
        app.panel.set_name_pattern("david");

        app.apply_filter();
        let note = app.notifications.current().unwrap();
        assert_eq!(note.notification_type, NotificationType::Info);
        assert_eq!(note.message, "Showing 2 of 10 transactions");

        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("x.xlsx"));
        app.clear_all();
        let cleared = app.notifications.current().unwrap();
        assert_eq!(cleared.notification_type, NotificationType::Info);
        assert_eq!(cleared.message, "Filters cleared");
    }

    #[test]
    fn test_export_notifies() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let path = temp_dir.path().join("filtered_data.xlsx");
        let mut app = App::new(&settings, FilterPanel::default(), path.clone());

        app.export();

        assert!(path.exists());
        let note = app.notifications.current().unwrap();
        assert!(note.message.contains("Exported 10 rows"));
    }

    #[test]
    fn test_export_failure_notifies_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let path = temp_dir.path().join("missing").join("out.xlsx");
        let mut app = App::new(&settings, FilterPanel::default(), path);

        app.export();

        let note = app.notifications.current().unwrap();
        assert_eq!(note.notification_type, NotificationType::Error);
    }

    #[test]
    fn test_move_bounds() {
        let settings = Settings::default();
        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("x.xlsx"));
        app.move_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 9);
    }
}
