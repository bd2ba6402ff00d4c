//! Keyboard handling for the interactive picker
//!
//! Key bindings:
//! - printable characters / Backspace edit the search query
//! - Up / Down move the highlight, Enter selects it
//! - Esc clears the query and selection, or quits when both are empty
//! - Ctrl+C always quits; `q` quits while loading or after a failed load

use super::state::LoadState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of processing an event
#[derive(Debug, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed
    Continue,
    /// State changed and the screen should be redrawn
    Handled,
    /// Exit the application
    Exit,
}

/// Applies `key_event` to `state`.
pub fn handle_key_event(state: &mut LoadState, key_event: &KeyEvent) -> EventResult {
    if key_event.kind != KeyEventKind::Press {
        return EventResult::Continue;
    }

    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        tracing::info!("Ctrl+C pressed, exiting");
        return EventResult::Exit;
    }

    let picker = match state {
        LoadState::Loaded(picker) => picker,
        LoadState::Loading(_) | LoadState::Failed(_) => {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') => EventResult::Exit,
                _ => EventResult::Continue,
            };
        }
    };

    match key_event.code {
        KeyCode::Esc => {
            if picker.has_input() {
                picker.reset();
                EventResult::Handled
            } else {
                EventResult::Exit
            }
        }
        KeyCode::Enter => match picker.select_highlighted() {
            Some(user) => {
                tracing::debug!("Selected user {}", user.user.id);
                EventResult::Handled
            }
            None => EventResult::Continue,
        },
        KeyCode::Up => {
            picker.move_up();
            EventResult::Handled
        }
        KeyCode::Down => {
            picker.move_down();
            EventResult::Handled
        }
        KeyCode::Backspace => {
            if picker.pop_char() {
                EventResult::Handled
            } else {
                EventResult::Continue
            }
        }
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            picker.push_char(c);
            EventResult::Handled
        }
        _ => EventResult::Continue,
    }
}
