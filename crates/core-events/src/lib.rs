//! Pagination events and lifecycle hooks.
//!
//! Every page transition is described by a `PageEvent`. Before a transition
//! commits, the controller shows the candidate config to the event-specific
//! hook and, for page changes, then to `on_change`; either may veto with
//! `HookOutcome::Cancel`. The first render only consults `on_init`.
//!
//! Hooks run synchronously on the caller's thread and must not block. They
//! receive a shared borrow of the candidate, so they can observe the pending
//! state but cannot reach back into the controller that invoked them.

use core_model::PaginationConfig;
use serde::Serialize;

/// A request to move the pagination to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "page", rename_all = "snake_case")]
pub enum PageEvent {
    /// First render of a bound target.
    Init,
    Next,
    Prev,
    /// A page button was activated. The id is clamped, never rejected.
    Click(usize),
}

impl PageEvent {
    /// Stable lowercase name (logs, CLI echo).
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Init => "init",
            PageEvent::Next => "next",
            PageEvent::Prev => "prev",
            PageEvent::Click(_) => "click",
        }
    }
}

/// Verdict returned by every hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HookOutcome {
    #[default]
    Continue,
    Cancel,
}

impl HookOutcome {
    pub fn is_cancel(self) -> bool {
        matches!(self, HookOutcome::Cancel)
    }
}

/// What a hook sees: the event, the page it leaves (`None` on first render)
/// and the config that would be committed.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub event: PageEvent,
    pub previous_page: Option<usize>,
    pub config: &'a PaginationConfig,
}

impl Candidate<'_> {
    pub fn new_page(&self) -> usize {
        self.config.current_page()
    }

    pub fn last_page(&self) -> usize {
        self.config.last_page()
    }

    /// True when the transition would leave the page unchanged (e.g. `Prev`
    /// on the first page).
    pub fn is_noop(&self) -> bool {
        self.previous_page == Some(self.new_page())
    }
}

/// Lifecycle hooks consulted by the transition controller.
///
/// All methods default to `Continue`; implementors override the ones they
/// care about.
pub trait PaginationHooks {
    fn on_init(&mut self, _candidate: &Candidate<'_>) -> HookOutcome {
        HookOutcome::Continue
    }
    fn on_click(&mut self, _candidate: &Candidate<'_>) -> HookOutcome {
        HookOutcome::Continue
    }
    fn on_next(&mut self, _candidate: &Candidate<'_>) -> HookOutcome {
        HookOutcome::Continue
    }
    fn on_prev(&mut self, _candidate: &Candidate<'_>) -> HookOutcome {
        HookOutcome::Continue
    }
    /// Runs after the event-specific hook for `Next`, `Prev` and `Click`.
    fn on_change(&mut self, _candidate: &Candidate<'_>) -> HookOutcome {
        HookOutcome::Continue
    }

    /// Dispatch to the hook matching `candidate.event`.
    fn on_event(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        match candidate.event {
            PageEvent::Init => self.on_init(candidate),
            PageEvent::Next => self.on_next(candidate),
            PageEvent::Prev => self.on_prev(candidate),
            PageEvent::Click(_) => self.on_click(candidate),
        }
    }
}

impl<T: PaginationHooks + ?Sized> PaginationHooks for &mut T {
    fn on_init(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_init(candidate)
    }
    fn on_click(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_click(candidate)
    }
    fn on_next(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_next(candidate)
    }
    fn on_prev(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_prev(candidate)
    }
    fn on_change(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_change(candidate)
    }
}

impl<T: PaginationHooks + ?Sized> PaginationHooks for Box<T> {
    fn on_init(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_init(candidate)
    }
    fn on_click(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_click(candidate)
    }
    fn on_next(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_next(candidate)
    }
    fn on_prev(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_prev(candidate)
    }
    fn on_change(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        (**self).on_change(candidate)
    }
}

/// Default no-op hooks implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl PaginationHooks for NoopHooks {}

type HookFn = Box<dyn FnMut(&Candidate<'_>) -> HookOutcome>;

/// Hooks assembled from closures; unset hooks continue.
///
/// ```
/// use core_events::{HookOutcome, HookSet};
///
/// let hooks = HookSet::new().on_click(|c| {
///     if c.new_page() > 3 { HookOutcome::Cancel } else { HookOutcome::Continue }
/// });
/// # let _ = hooks;
/// ```
#[derive(Default)]
pub struct HookSet {
    init: Option<HookFn>,
    click: Option<HookFn>,
    next: Option<HookFn>,
    prev: Option<HookFn>,
    change: Option<HookFn>,
}

impl HookSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_init(mut self, f: impl FnMut(&Candidate<'_>) -> HookOutcome + 'static) -> Self {
        self.init = Some(Box::new(f));
        self
    }
    pub fn on_click(mut self, f: impl FnMut(&Candidate<'_>) -> HookOutcome + 'static) -> Self {
        self.click = Some(Box::new(f));
        self
    }
    pub fn on_next(mut self, f: impl FnMut(&Candidate<'_>) -> HookOutcome + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }
    pub fn on_prev(mut self, f: impl FnMut(&Candidate<'_>) -> HookOutcome + 'static) -> Self {
        self.prev = Some(Box::new(f));
        self
    }
    pub fn on_change(mut self, f: impl FnMut(&Candidate<'_>) -> HookOutcome + 'static) -> Self {
        self.change = Some(Box::new(f));
        self
    }
}

fn call(hook: &mut Option<HookFn>, candidate: &Candidate<'_>) -> HookOutcome {
    hook.as_mut().map_or(HookOutcome::Continue, |f| f(candidate))
}

impl PaginationHooks for HookSet {
    fn on_init(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        call(&mut self.init, candidate)
    }
    fn on_click(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        call(&mut self.click, candidate)
    }
    fn on_next(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        call(&mut self.next, candidate)
    }
    fn on_prev(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        call(&mut self.prev, candidate)
    }
    fn on_change(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        call(&mut self.change, candidate)
    }
}

impl std::fmt::Debug for HookSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookSet")
            .field("init", &self.init.is_some())
            .field("click", &self.click.is_some())
            .field("next", &self.next.is_some())
            .field("prev", &self.prev.is_some())
            .field("change", &self.change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::PaginationOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn config(page: i64) -> PaginationConfig {
        PaginationOptions {
            count: 100,
            current_page: page,
            ..PaginationOptions::default()
        }
        .validate()
        .unwrap()
    }

    fn click(config: &PaginationConfig) -> Candidate<'_> {
        Candidate {
            event: PageEvent::Click(config.current_page()),
            previous_page: Some(1),
            config,
        }
    }

    #[test]
    fn noop_hooks_continue_everything() {
        let cfg = config(2);
        let candidate = Candidate {
            event: PageEvent::Next,
            previous_page: Some(1),
            config: &cfg,
        };
        let mut hooks = NoopHooks;
        assert_eq!(hooks.on_event(&candidate), HookOutcome::Continue);
        assert_eq!(hooks.on_change(&candidate), HookOutcome::Continue);
    }

    #[test]
    fn on_event_routes_by_event_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = |name: &'static str, seen: &Rc<RefCell<Vec<&'static str>>>| {
            let seen = Rc::clone(seen);
            move |_: &Candidate<'_>| {
                seen.borrow_mut().push(name);
                HookOutcome::Continue
            }
        };
        let mut hooks = HookSet::new()
            .on_init(log("init", &seen))
            .on_click(log("click", &seen))
            .on_next(log("next", &seen))
            .on_prev(log("prev", &seen));
        let cfg = config(3);
        for event in [PageEvent::Init, PageEvent::Click(3), PageEvent::Next, PageEvent::Prev] {
            hooks.on_event(&Candidate {
                event,
                previous_page: None,
                config: &cfg,
            });
        }
        assert_eq!(*seen.borrow(), vec!["init", "click", "next", "prev"]);
    }

    #[test]
    fn hook_set_cancel_is_reported() {
        let mut hooks = HookSet::new().on_change(|c| {
            if c.new_page() == 5 {
                HookOutcome::Cancel
            } else {
                HookOutcome::Continue
            }
        });
        let five = config(5);
        let six = config(6);
        assert!(PaginationHooks::on_change(&mut hooks, &click(&five)).is_cancel());
        assert!(!PaginationHooks::on_change(&mut hooks, &click(&six)).is_cancel());
    }

    #[test]
    fn candidate_detects_noop() {
        let cfg = config(1);
        let cand = Candidate {
            event: PageEvent::Prev,
            previous_page: Some(1),
            config: &cfg,
        };
        assert!(cand.is_noop());
        assert_eq!(cand.last_page(), 10);
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(PageEvent::Click(4).name(), "click");
        assert_eq!(PageEvent::Init.name(), "init");
    }
}
