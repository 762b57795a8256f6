use crate::app::AppState;
use crate::domain::{Pane, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        _ => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Tab => {
            app.switch_focus();
            Ok(false)
        }

        // Toggle the selected task's done flag
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.focus == Pane::Tasks {
                app.toggle_selected_task();
            }
            Ok(false)
        }

        // Delete selected entry in the focused pane
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_selected();
            Ok(false)
        }

        // Add task / agenda entry
        KeyCode::Char('a') => {
            app.open_add_task_form();
            Ok(false)
        }
        KeyCode::Char('A') => {
            app.open_add_agenda_form();
            Ok(false)
        }

        // Timer controls
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_timer();
            Ok(false)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.pause_timer();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }

        // Timer duration forms
        KeyCode::Char('w') | KeyCode::Char('W') => {
            app.open_work_minutes_form();
            Ok(false)
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.open_break_minutes_form();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while an input form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let two_fields = app.ui_mode == UiMode::AddingAgenda;

    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_form();
            Ok(false)
        }
        KeyCode::Tab => {
            if two_fields {
                if let Some(form) = app.input_form.as_mut() {
                    form.editing_field = (form.editing_field + 1) % 2;
                }
            }
            Ok(false)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.input_form.as_mut() {
                if form.editing_field == 0 {
                    form.text.pop();
                } else {
                    form.when.pop();
                }
            }
            Ok(false)
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.input_form.as_mut() {
                if form.editing_field == 0 {
                    form.text.push(c);
                } else {
                    form.when.push(c);
                }
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}
