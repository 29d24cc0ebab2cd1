//! Terminal line writer.
//!
//! Batches primitive terminal operations for a single status-style line and
//! emits them in one flush, so an in-place redraw never shows a half-cleared
//! line.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is written before `flush_to`.
//! * `clear_line` returns the cursor to column 0 before clearing.
//! * The writer owns no global state; it is a short-lived object per redraw.

use anyhow::Result;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    ClearLine,
    Print(String),
}

#[derive(Default)]
pub struct LineWriter {
    cmds: Vec<Command>,
}

impl LineWriter {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::ClearLine => {
                    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
