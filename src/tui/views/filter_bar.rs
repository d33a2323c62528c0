//! Filter bar view
//!
//! The four filter controls: date range, payee name, and amount bounds.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{FilterCriteria, DISPLAY_DATE_FORMAT};
use crate::tui::app::{App, FilterField, InputMode};
use crate::tui::layout::FilterBarLayout;

/// Render the filter bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let title = if editing { " Filters (editing) " } else { " Filters " };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = FilterBarLayout::new(inner);
    let focused = app.focused_field;

    let date_line = Line::from(vec![
        Span::styled(
            marker(focused == FilterField::DateRange),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("Date: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            date_range_label(app.panel.criteria()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(date_line), layout.date_range);

    let fields = [
        (FilterField::Name, &app.name_input, layout.name),
        (FilterField::MinAmount, &app.min_input, layout.min_amount),
        (FilterField::MaxAmount, &app.max_input, layout.max_amount),
    ];

    for (field, input, rect) in fields {
        let has_focus = focused == field;
        frame.render_widget(
            Paragraph::new(Span::styled(marker(has_focus), Style::default().fg(Color::Cyan))),
            rect,
        );
        let input_area = Rect {
            x: rect.x + 2,
            width: rect.width.saturating_sub(2),
            ..rect
        };
        frame.render_widget(input.clone().focused(has_focus && editing), input_area);
    }
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "▸ "
    } else {
        "  "
    }
}

/// Short description of the date bounds
fn date_range_label(criteria: &FilterCriteria) -> String {
    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
            .unwrap_or_else(|| "…".to_string())
    };

    match (criteria.start_date, criteria.end_date) {
        (None, None) => "Select Date".to_string(),
        (start, end) => format!("{} – {}", fmt(start), fmt(end)),
    }
}
