//! Renderer seam.
//!
//! The core produces a `RenderPlan`; anything that puts the plan in front of a
//! user implements `Renderer`. Three adapters ship with the crate:
//!
//! * `TextRenderer`: one plain text line per plan, for logs and scripted runs.
//! * `JsonRenderer`: one JSON document per plan, for external front ends.
//! * `TerminalRenderer`: redraws a single terminal line in place (interactive).
//!
//! Text form: controls and page buttons are separated by one space, the
//! spacer label is inserted verbatim. The current page is wrapped in `[..]`
//! and a disabled control in `(..)`, e.g. `(«) [1] 2 3 ... 10 »`.

use std::io::Write;

use anyhow::Result;
use core_model::{
    DEFAULT_NEXT_LABEL, DEFAULT_PREV_LABEL, DEFAULT_SPACER_LABEL, RenderPlan, Slot,
};

use crate::writer::LineWriter;

pub trait Renderer {
    fn render(&mut self, plan: &RenderPlan) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, plan: &RenderPlan) -> Result<()> {
        (**self).render(plan)
    }
}

/// Display text for the non-numeric slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub prev: String,
    pub next: String,
    pub spacer: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            prev: DEFAULT_PREV_LABEL.to_string(),
            next: DEFAULT_NEXT_LABEL.to_string(),
            spacer: DEFAULT_SPACER_LABEL.to_string(),
        }
    }
}

fn control_token(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("({label})")
    }
}

fn slot_token(slot: &Slot, labels: &Labels) -> Option<String> {
    match slot {
        Slot::PrevControl { enabled } => Some(control_token(&labels.prev, *enabled)),
        Slot::NextControl { enabled } => Some(control_token(&labels.next, *enabled)),
        Slot::PageButton {
            page_number,
            is_current: true,
        } => Some(format!("[{page_number}]")),
        Slot::PageButton { page_number, .. } => Some(page_number.to_string()),
        Slot::JumpSpacer => None,
    }
}

/// Plain text form of `plan`. An empty plan formats as an empty string.
pub fn format_plan(plan: &RenderPlan, labels: &Labels) -> String {
    let mut out = String::new();
    let mut need_sep = false;
    for slot in plan {
        match slot_token(slot, labels) {
            Some(token) => {
                if need_sep {
                    out.push(' ');
                }
                out.push_str(&token);
                need_sep = true;
            }
            None => {
                out.push_str(&labels.spacer);
                need_sep = false;
            }
        }
    }
    out
}

/// Writes one text line per rendered plan.
pub struct TextRenderer<W: Write> {
    out: W,
    labels: Labels,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, labels: Labels) -> Self {
        Self { out, labels }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, plan: &RenderPlan) -> Result<()> {
        writeln!(self.out, "{}", format_plan(plan, &self.labels))?;
        Ok(())
    }
}

/// Writes one compact JSON document per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, plan: &RenderPlan) -> Result<()> {
        serde_json::to_writer(&mut self.out, plan)?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Redraws the plan on the current terminal line, followed by an optional
/// status suffix (e.g. the pending page number being typed).
pub struct TerminalRenderer<W: Write> {
    out: W,
    labels: Labels,
    status: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, labels: Labels) -> Self {
        Self {
            out,
            labels,
            status: String::new(),
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, plan: &RenderPlan) -> Result<()> {
        let mut line = format_plan(plan, &self.labels);
        if !self.status.is_empty() {
            line.push_str("  ");
            line.push_str(&self.status);
        }
        let mut writer = LineWriter::new();
        writer.clear_line();
        writer.print(line);
        writer.flush_to(&mut self.out)
    }
}
