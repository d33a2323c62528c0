//! Date range dialog
//!
//! Collects a start and end date and hands both to the filter panel in one
//! selection when confirmed. Dates are typed as `MM-DD-YYYY` or
//! `YYYY-MM-DD`; anything else counts as unset.

use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{parse_user_date, FilterCriteria, DISPLAY_DATE_FORMAT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which date is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateField {
    #[default]
    Start,
    End,
}

/// State for the date range dialog
#[derive(Debug, Clone, Default)]
pub struct DateRangeState {
    pub start_input: TextInput,
    pub end_input: TextInput,
    pub active_field: DateField,
}

impl DateRangeState {
    pub fn new() -> Self {
        Self {
            start_input: TextInput::new().label("Start").placeholder("MM-DD-YYYY"),
            end_input: TextInput::new().label("End  ").placeholder("MM-DD-YYYY"),
            active_field: DateField::Start,
        }
    }

    /// Prefill from the current criteria
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut state = Self::new();
        if let Some(start) = criteria.start_date {
            state.start_input = state
                .start_input
                .content(start.format(DISPLAY_DATE_FORMAT).to_string());
        }
        if let Some(end) = criteria.end_date {
            state.end_input = state
                .end_input
                .content(end.format(DISPLAY_DATE_FORMAT).to_string());
        }
        state
    }

    /// The input being edited
    pub fn active_input_mut(&mut self) -> &mut TextInput {
        match self.active_field {
            DateField::Start => &mut self.start_input,
            DateField::End => &mut self.end_input,
        }
    }

    /// Switch to the other field
    pub fn toggle_field(&mut self) {
        self.active_field = match self.active_field {
            DateField::Start => DateField::End,
            DateField::End => DateField::Start,
        };
    }

    /// Both dates as parsed right now
    pub fn selection(&self) -> [Option<NaiveDate>; 2] {
        [
            parse_user_date(self.start_input.value()),
            parse_user_date(self.end_input.value()),
        ]
    }
}

/// Render the date range dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 10, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Select Date Range ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Start
            Constraint::Length(1), // End
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let state = &app.date_range_state;

    let start = state
        .start_input
        .clone()
        .focused(state.active_field == DateField::Start);
    frame.render_widget(start, chunks[1]);

    let end = state
        .end_input
        .clone()
        .focused(state.active_field == DateField::End);
    frame.render_widget(end, chunks[2]);

    let note = match state.selection() {
        [Some(_), Some(_)] => Span::styled("Range will filter", Style::default().fg(Color::Green)),
        _ => Span::styled(
            "Both dates are needed to filter",
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(note)), chunks[4]);

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Green)),
        Span::raw(" Switch  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Select  "),
        Span::styled("[Esc]", Style::default().fg(Color::White)),
        Span::raw(" Cancel"),
    ]));
    frame.render_widget(instructions, chunks[6]);
}

/// Handle key input for the date range dialog
///
/// Keys the dialog has no use for are ignored while it is open.
pub fn handle_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.commit_date_range(),
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.date_range_state.toggle_field();
        }
        KeyCode::Char(c) => app.date_range_state.active_input_mut().insert(c),
        KeyCode::Backspace => app.date_range_state.active_input_mut().backspace(),
        KeyCode::Delete => app.date_range_state.active_input_mut().delete(),
        KeyCode::Left => app.date_range_state.active_input_mut().move_left(),
        KeyCode::Right => app.date_range_state.active_input_mut().move_right(),
        _ => {}
    }
}
