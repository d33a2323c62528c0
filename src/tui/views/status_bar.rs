//! Status bar view
//!
//! Shows how many records are visible, the export target, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let shown = app.panel.view().len();
    let total = app.panel.dataset().len();

    let count_color = if app.panel.is_filtered() {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Showing ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} of {}", shown, total),
            Style::default().fg(count_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("Export: {}", app.export_path.display()),
            Style::default().fg(Color::Cyan),
        ),
    ];

    let hints = match app.input_mode {
        InputMode::Normal => " f:Filter  c:Clear All  e:Export  ?:Help  q:Quit ",
        InputMode::Editing => " Enter:Filter  Tab:Next  Esc:Done ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
