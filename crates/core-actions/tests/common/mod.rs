#![allow(dead_code)] // Shared across several integration tests; each test binary uses a subset of helpers.

use core_events::{Candidate, HookOutcome, PaginationHooks};
use core_model::PaginationOptions;

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub hook: &'static str,
    pub previous_page: Option<usize>,
    pub new_page: usize,
}

pub fn call(hook: &'static str, previous_page: Option<usize>, new_page: usize) -> Call {
    Call {
        hook,
        previous_page,
        new_page,
    }
}

/// Hooks that record every call and cancel the hooks named in `cancel`.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    pub calls: Vec<Call>,
    pub cancel: Vec<&'static str>,
}

impl RecordingHooks {
    pub fn cancelling(hooks: &[&'static str]) -> Self {
        Self {
            calls: Vec::new(),
            cancel: hooks.to_vec(),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.calls.iter().map(|c| c.hook).collect()
    }

    fn record(&mut self, hook: &'static str, candidate: &Candidate<'_>) -> HookOutcome {
        self.calls.push(call(hook, candidate.previous_page, candidate.new_page()));
        if self.cancel.contains(&hook) {
            HookOutcome::Cancel
        } else {
            HookOutcome::Continue
        }
    }
}

impl PaginationHooks for RecordingHooks {
    fn on_init(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        self.record("init", candidate)
    }
    fn on_click(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        self.record("click", candidate)
    }
    fn on_next(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        self.record("next", candidate)
    }
    fn on_prev(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        self.record("prev", candidate)
    }
    fn on_change(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        self.record("change", candidate)
    }
}

pub fn options(count: i64, current_page: i64) -> PaginationOptions {
    PaginationOptions {
        count,
        current_page,
        ..PaginationOptions::default()
    }
}
