//! Drawing the interactive screen.
//!
//! Screen content is built as plain [`ScreenLine`]s first so layout can be
//! tested without a terminal, then written out with crossterm.

use super::detail::detail_lines;
use super::state::LoadState;
use crate::constants::ui::{MAX_VISIBLE_OPTIONS, PICKER_WIDTH, SEARCH_LABEL};
use crate::error::AppError;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

pub const NO_OPTIONS_TEXT: &str = "No options";
pub const HELP_TEXT: &str = "↑/↓ move  Enter select  Esc clear/quit  Ctrl+C exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Label,
    Highlighted,
    Muted,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub text: String,
    pub style: LineStyle,
}

impl ScreenLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Cuts `text` to at most `width` terminal columns, ending with `…` when shortened.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Lines for the current state, each fitted to `width` columns.
pub fn screen_lines(state: &LoadState, width: usize) -> Vec<ScreenLine> {
    let mut lines = Vec::new();

    match state {
        LoadState::Loading(indicator) => {
            lines.push(ScreenLine::new(indicator.line(), LineStyle::Muted));
        }
        LoadState::Failed(message) => {
            lines.push(ScreenLine::new(
                format!("Failed to load users: {message}"),
                LineStyle::Error,
            ));
            lines.push(ScreenLine::new("Press q or Esc to quit", LineStyle::Muted));
        }
        LoadState::Loaded(picker) => {
            lines.push(ScreenLine::new(SEARCH_LABEL, LineStyle::Label));
            lines.push(ScreenLine::new(
                format!("> {}_", picker.query()),
                LineStyle::Normal,
            ));
            lines.push(ScreenLine::new("─".repeat(width), LineStyle::Muted));

            let (start, visible) = picker.visible_window(MAX_VISIBLE_OPTIONS);
            if visible.is_empty() {
                lines.push(ScreenLine::new(NO_OPTIONS_TEXT, LineStyle::Muted));
            }
            let highlighted = picker.highlighted_position();
            for (offset, user) in visible.iter().enumerate() {
                if highlighted == Some(start + offset) {
                    lines.push(ScreenLine::new(
                        format!("> {}", user.display()),
                        LineStyle::Highlighted,
                    ));
                } else {
                    lines.push(ScreenLine::new(
                        format!("  {}", user.display()),
                        LineStyle::Normal,
                    ));
                }
            }
            let hidden = picker.match_count() - start - visible.len();
            if hidden > 0 {
                lines.push(ScreenLine::new(
                    format!("  ({hidden} more)"),
                    LineStyle::Muted,
                ));
            }

            if let Some(user) = picker.selected() {
                lines.push(ScreenLine::new("", LineStyle::Normal));
                let mut detail = detail_lines(user).into_iter();
                if let Some(name) = detail.next() {
                    lines.push(ScreenLine::new(name, LineStyle::Label));
                }
                lines.extend(detail.map(|line| ScreenLine::new(line, LineStyle::Normal)));
            }

            lines.push(ScreenLine::new("", LineStyle::Normal));
            lines.push(ScreenLine::new(HELP_TEXT, LineStyle::Muted));
        }
    }

    for line in &mut lines {
        line.text = truncate_to_width(&line.text, width);
    }
    lines
}

/// Clears the terminal and draws `state`.
pub fn render<W: Write>(out: &mut W, state: &LoadState) -> Result<(), AppError> {
    let (columns, rows) = terminal::size().unwrap_or((PICKER_WIDTH as u16, 24));
    let width = usize::from(columns).min(PICKER_WIDTH);

    queue!(out, Clear(ClearType::All))?;
    for (row, line) in screen_lines(state, width)
        .iter()
        .take(usize::from(rows))
        .enumerate()
    {
        // Raw mode does not return the carriage on newline, so every row is positioned
        queue!(out, MoveTo(0, row as u16))?;
        match line.style {
            LineStyle::Normal => {}
            LineStyle::Label => queue!(out, SetAttribute(Attribute::Bold))?,
            LineStyle::Highlighted => queue!(out, SetAttribute(Attribute::Reverse))?,
            LineStyle::Muted => queue!(out, SetForegroundColor(Color::DarkGrey))?,
            LineStyle::Error => queue!(out, SetForegroundColor(Color::Red))?,
        }
        queue!(
            out,
            Print(&line.text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }
    out.flush()?;
    Ok(())
}
