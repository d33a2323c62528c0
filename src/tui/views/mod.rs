//! TUI Views module
//!
//! The filter bar, the results table, and the status bar, plus the
//! dialog and notification overlays drawn above them.

pub mod filter_bar;
pub mod results;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    filter_bar::render(frame, app, layout.filter_bar);
    results::render(frame, app, layout.results);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::DateRange => dialogs::date_range::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = notification_rect(40, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::services::FilterPanel;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_full_view() {
        let settings = Settings::default();
        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("out.xlsx"));
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("John Doe"));
        assert!(text.contains("01-01-2023"));
        assert!(text.contains("10 of 10"));
    }

    #[test]
    fn test_render_filtered_view() {
        let settings = Settings::default();
        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("out.xlsx"));
        app.panel.set_name_pattern("david");
        app.apply_filter();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("David Wilson"));
        assert!(!text.contains("John Doe"));
        assert!(text.contains("2 of 10"));
    }

    #[test]
    fn test_render_empty_view_and_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings, FilterPanel::default(), PathBuf::from("out.xlsx"));
        app.panel.set_name_pattern("nobody");
        app.apply_filter();
        app.open_dialog(ActiveDialog::DateRange);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Select Date Range"));
        assert!(text.contains("0 of 10"));
    }
}
