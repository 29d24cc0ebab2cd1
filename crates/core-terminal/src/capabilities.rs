//! Terminal capability probing.
//!
//! Interactive mode reads single key presses and redraws in place, which only
//! works when both stdin and stdout are attached to a terminal. Scripted runs
//! (pipes, CI) must use the line-oriented renderers instead.

use crossterm::tty::IsTty;
use std::io::{stdin, stdout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    pub stdin_is_tty: bool,
    pub stdout_is_tty: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::new(stdin().is_tty(), stdout().is_tty())
    }

    pub const fn new(stdin_is_tty: bool, stdout_is_tty: bool) -> Self {
        Self {
            stdin_is_tty,
            stdout_is_tty,
        }
    }

    pub fn supports_interactive(&self) -> bool {
        self.stdin_is_tty && self.stdout_is_tty
    }
}
