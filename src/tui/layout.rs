//! Layout definitions for the TUI
//!
//! Filter bar on top, results table in the middle, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Filter controls
    pub filter_bar: Rect,
    /// Results table
    pub results: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Min(3),    // Results
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            filter_bar: vertical[0],
            results: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// One cell per filter control inside the filter bar
pub struct FilterBarLayout {
    pub date_range: Rect,
    pub name: Rect,
    pub min_amount: Rect,
    pub max_amount: Rect,
}

impl FilterBarLayout {
    /// Calculate filter bar layout from its inner area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32), // Date range
                Constraint::Min(20),    // Name
                Constraint::Length(16), // Min
                Constraint::Length(16), // Max
            ])
            .split(area);

        Self {
            date_range: chunks[0],
            name: chunks[1],
            min_amount: chunks[2],
            max_amount: chunks[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Top-right corner rect for toast notifications
pub fn notification_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_stacks_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.filter_bar.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.results.height, 26);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(50, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(r, Rect::new(0, 0, 40, 8));
    }

    #[test]
    fn test_notification_rect() {
        let r = notification_rect(30, 4, Rect::new(0, 0, 100, 30));
        assert_eq!(r, Rect::new(70, 0, 30, 4));
    }
}
