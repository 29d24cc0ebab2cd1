//! Terminal session handling for the interactive pager.
//!
//! The pager redraws one line in place, so the session only needs raw mode
//! (keys arrive unbuffered) and a hidden cursor; the alternate screen is not
//! used and the final plan stays visible after exit.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use tracing::debug;

pub mod capabilities;
pub use capabilities::TerminalCapabilities;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard restoring the terminal even if the caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), Hide)?;
            self.entered = true;
            debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            // Raw mode does not translate '\n', so return to column 0 explicitly.
            execute!(stdout(), Show, Print("\n"), MoveToColumn(0))?;
            disable_raw_mode()?;
            self.entered = false;
            debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_without_enter_is_a_no_op() {
        let mut backend = CrosstermBackend::new();
        assert!(!backend.is_entered());
        backend.leave().unwrap();
        assert!(!backend.is_entered());
    }
}
