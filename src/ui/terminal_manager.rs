//! Terminal setup and cleanup for the interactive picker
//!
//! Raw mode and the alternate screen are skipped in debug mode so log output
//! and panics stay readable in the invoking shell.

use crate::constants::TERMINAL_TITLE;
use crate::error::AppError;
use crossterm::{
    cursor, execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::{self, Write, stdout};

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    pub debug_mode: bool,
}

/// Terminal manager responsible for setup and cleanup operations
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            config: TerminalConfig::default(),
        }
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<std::io::Stdout, AppError> {
        let mut stdout = stdout();
        execute!(stdout, SetTitle(TERMINAL_TITLE))?;

        if !self.config.debug_mode {
            enable_raw_mode()?;
            enter_alternate_screen(&mut stdout, disable_raw_mode)?;
        }

        Ok(stdout)
    }

    /// Cleanup terminal after interactive mode
    /// Restores terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: std::io::Stdout) -> Result<(), AppError> {
        if !self.config.debug_mode {
            disable_raw_mode()?;
            execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}

/// Switches `out` to the alternate screen and hides the cursor.
///
/// Raw mode is already on when this runs, so `restore` is called if the
/// switch fails. The original error is returned either way.
fn enter_alternate_screen<W: Write>(
    out: &mut W,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<(), AppError> {
    if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
        if let Err(restore_error) = restore() {
            tracing::warn!("Failed to disable raw mode after setup error: {restore_error}");
        }
        return Err(e.into());
    }
    Ok(())
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct BrokenTerminal;

    impl Write for BrokenTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
        }
    }

    #[test]
    fn test_failed_screen_switch_restores_raw_mode() {
        let restored = Cell::new(false);
        let result = enter_alternate_screen(&mut BrokenTerminal, || {
            restored.set(true);
            Ok(())
        });

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(restored.get());
    }

    #[test]
    fn test_failed_restore_keeps_original_error() {
        let result = enter_alternate_screen(&mut BrokenTerminal, || {
            Err(io::Error::other("raw mode stuck"))
        });

        match result {
            Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected the screen switch error, got {other:?}"),
        }
    }

    #[test]
    fn test_successful_screen_switch_skips_restore() {
        let mut buffer: Vec<u8> = Vec::new();
        let restored = Cell::new(false);
        let result = enter_alternate_screen(&mut buffer, || {
            restored.set(true);
            Ok(())
        });

        assert!(result.is_ok());
        assert!(!restored.get());
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_terminal_manager_default() {
        let manager = TerminalManager::default();
        assert!(!manager.config().debug_mode);
    }

    #[test]
    fn test_terminal_manager_with_config() {
        let manager = TerminalManager::with_config(TerminalConfig { debug_mode: true });
        assert!(manager.config().debug_mode);
    }
}
