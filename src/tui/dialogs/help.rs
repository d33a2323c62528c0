//! Help dialog
//!
//! Lists the keyboard shortcuts for each input mode.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Filter Panel"),
        Line::from(""),
        key_line("Tab/i", "Edit the focused filter"),
        key_line("h/l", "Focus previous/next filter"),
        key_line("d", "Choose a date range"),
        key_line("f/Enter", "Apply filters"),
        key_line("c", "Clear all filters"),
        key_line("e", "Export results"),
        key_line("j/k", "Move selection down/up"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit application"),
        Line::from(""),
        section("Editing"),
        Line::from(""),
        key_line("Tab/S-Tab", "Next/previous filter"),
        key_line("Enter", "Apply filters"),
        key_line("Esc", "Stop editing"),
        Line::from(""),
        Line::from(Span::styled(
            "A date range only filters once both dates are set.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
