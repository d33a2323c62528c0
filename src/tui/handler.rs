//! Event handler for the TUI
//!
//! Routes keyboard events to the dialog, editing, or normal-mode handlers
//! depending on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well as presses
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::DateRange => dialogs::date_range::handle_key(app, key.code),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Tab | KeyCode::Char('i') => app.start_editing(),
        KeyCode::Char('h') | KeyCode::Left => app.focused_field = app.focused_field.prev(),
        KeyCode::Char('l') | KeyCode::Right => app.focused_field = app.focused_field.next(),
        KeyCode::Char('d') => app.open_dialog(ActiveDialog::DateRange),

        KeyCode::Char('f') | KeyCode::Enter => app.apply_filter(),
        KeyCode::Char('c') => app.clear_all(),
        KeyCode::Char('e') => app.export(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.panel.view().len().saturating_sub(1);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while editing a filter control
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Enter => {
            app.stop_editing();
            app.apply_filter();
        }
        KeyCode::Tab => {
            app.focused_field = app.focused_field.next();
            app.start_editing();
        }
        KeyCode::BackTab => {
            app.focused_field = app.focused_field.prev();
            app.start_editing();
        }
        code => {
            let Some(input) = app.focused_input_mut() else {
                // date range has no inline input
                app.open_dialog(ActiveDialog::DateRange);
                return Ok(());
            };

            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => return Ok(()),
            }
            app.sync_focused_input();
        }
    }

    Ok(())
}
