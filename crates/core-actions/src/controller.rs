//! Transition controller.
//!
//! `Paginator` owns the committed `PaginationConfig` of one bound target and
//! funnels every event through the same protocol:
//!
//! 1. Compute the candidate config: `Next -> min(last, page + 1)`,
//!    `Prev -> max(first, page - 1)`, `Click(id) -> min(last, id)` (and never
//!    below the first page), `Init` -> the configured page.
//! 2. Ask the event hook (`on_init` / `on_click` / `on_next` / `on_prev`).
//!    `Cancel` aborts: no state change, no further hooks, no rebuild.
//! 3. `Init` on an empty list stops here with an empty plan.
//! 4. For page changes (`Next`, `Prev`, `Click`), ask `on_change` with the
//!    same candidate; `Cancel` aborts. The first render is not a page change
//!    and only `on_init` can veto it.
//! 5. Commit: the candidate replaces the config and the plan is rebuilt.
//!
//! States: `Uninitialized` until an `Init` commits, then `Rendered`. A
//! cancelled `Init` leaves the controller uninitialized; other events are
//! ignored there without consulting any hook.

use core_events::{Candidate, NoopHooks, PageEvent, PaginationHooks};
use core_model::{ConfigError, PaginationConfig, PaginationOptions, RenderPlan};
use tracing::{debug, trace};

use crate::transition::{HookStage, IgnoreReason, Transition};

static EMPTY_PLAN: RenderPlan = RenderPlan::empty();

#[derive(Debug, Clone, PartialEq, Eq)]
enum ControllerState {
    /// Holds the validated config the first render will try to commit.
    Uninitialized { pending: PaginationConfig },
    Rendered {
        config: PaginationConfig,
        plan: RenderPlan,
    },
}

#[derive(Debug)]
pub struct Paginator<H: PaginationHooks = NoopHooks> {
    state: ControllerState,
    hooks: H,
}

/// Validate `options`, bind `hooks` and run the first render.
///
/// The returned controller exposes the plan through `plan()`; it is empty when
/// there are no items or when `on_init` cancelled.
pub fn initialize<H: PaginationHooks>(
    options: &PaginationOptions,
    hooks: H,
) -> Result<Paginator<H>, ConfigError> {
    let mut paginator = Paginator::new(options, hooks)?;
    paginator.init();
    Ok(paginator)
}

impl Paginator<NoopHooks> {
    /// Controller without hooks; every transition commits.
    pub fn without_hooks(options: &PaginationOptions) -> Result<Self, ConfigError> {
        Self::new(options, NoopHooks)
    }
}

impl<H: PaginationHooks> Paginator<H> {
    pub fn new(options: &PaginationOptions, hooks: H) -> Result<Self, ConfigError> {
        Ok(Self::from_config(options.validate()?, hooks))
    }

    pub fn from_config(config: PaginationConfig, hooks: H) -> Self {
        Self {
            state: ControllerState::Uninitialized { pending: config },
            hooks,
        }
    }

    pub fn init(&mut self) -> &RenderPlan {
        self.dispatch(PageEvent::Init);
        self.plan()
    }

    pub fn next(&mut self) -> &RenderPlan {
        self.dispatch(PageEvent::Next);
        self.plan()
    }

    pub fn prev(&mut self) -> &RenderPlan {
        self.dispatch(PageEvent::Prev);
        self.plan()
    }

    pub fn click(&mut self, page: usize) -> &RenderPlan {
        self.dispatch(PageEvent::Click(page));
        self.plan()
    }

    /// Run the transition protocol for `event` and report what happened.
    pub fn dispatch(&mut self, event: PageEvent) -> Transition {
        let (candidate, previous_page) = match self.candidate_for(event) {
            Ok(found) => found,
            Err(reason) => {
                trace!(
                    target: "pagination.transition",
                    event = event.name(),
                    ?reason,
                    "transition_ignored"
                );
                return Transition::Ignored { event, reason };
            }
        };

        let view = Candidate {
            event,
            previous_page,
            config: &candidate,
        };

        if self.hooks.on_event(&view).is_cancel() {
            return cancelled(event, HookStage::Event, previous_page, &candidate);
        }

        if candidate.is_empty() {
            debug!(target: "pagination.transition", event = event.name(), "transition_empty");
            self.state = ControllerState::Rendered {
                config: candidate,
                plan: RenderPlan::empty(),
            };
            return Transition::Empty { event };
        }

        if event != PageEvent::Init && self.hooks.on_change(&view).is_cancel() {
            return cancelled(event, HookStage::Change, previous_page, &candidate);
        }

        let to = candidate.current_page();
        let plan = core_render::build(&candidate);
        debug!(
            target: "pagination.transition",
            event = event.name(),
            from = previous_page,
            to,
            last_page = candidate.last_page(),
            "transition_committed"
        );
        self.state = ControllerState::Rendered {
            config: candidate,
            plan,
        };
        Transition::Committed {
            event,
            from: previous_page,
            to,
        }
    }

    fn candidate_for(
        &self,
        event: PageEvent,
    ) -> Result<(PaginationConfig, Option<usize>), IgnoreReason> {
        let config = match (&self.state, event) {
            (ControllerState::Uninitialized { pending }, PageEvent::Init) => {
                return Ok((pending.clone(), None));
            }
            (ControllerState::Uninitialized { .. }, _) => {
                return Err(IgnoreReason::Uninitialized);
            }
            (ControllerState::Rendered { config, .. }, _) => config,
        };

        if config.is_empty() {
            return match event {
                PageEvent::Init => Ok((config.clone(), None)),
                _ => Err(IgnoreReason::NoPages),
            };
        }

        let page = config.current_page();
        let candidate = match event {
            PageEvent::Init => config.clone(),
            PageEvent::Next => config.with_current_page(page + 1),
            PageEvent::Prev => config.with_current_page(page.saturating_sub(1)),
            PageEvent::Click(id) => config.with_current_page(id),
        };
        Ok((candidate, Some(page)))
    }

    /// Current plan; empty before the first committed render.
    pub fn plan(&self) -> &RenderPlan {
        match &self.state {
            ControllerState::Rendered { plan, .. } => plan,
            ControllerState::Uninitialized { .. } => &EMPTY_PLAN,
        }
    }

    /// Committed config, `None` until the first render commits.
    pub fn config(&self) -> Option<&PaginationConfig> {
        match &self.state {
            ControllerState::Rendered { config, .. } => Some(config),
            ControllerState::Uninitialized { .. } => None,
        }
    }

    /// Committed page, `None` before the first render or with no items.
    pub fn current_page(&self) -> Option<usize> {
        self.config()
            .filter(|c| !c.is_empty())
            .map(PaginationConfig::current_page)
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ControllerState::Rendered { .. })
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn into_hooks(self) -> H {
        self.hooks
    }
}

fn cancelled(
    event: PageEvent,
    by: HookStage,
    previous_page: Option<usize>,
    candidate: &PaginationConfig,
) -> Transition {
    debug!(
        target: "pagination.hook",
        event = event.name(),
        stage = ?by,
        from = previous_page,
        to = candidate.current_page(),
        "transition_cancelled"
    );
    Transition::Cancelled { event, by }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{HookOutcome, HookSet};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options(count: i64, current_page: i64) -> PaginationOptions {
        PaginationOptions {
            count,
            current_page,
            ..PaginationOptions::default()
        }
    }

    #[test]
    fn initialize_renders_first_plan() {
        let p = initialize(&options(95, 3), NoopHooks).unwrap();
        assert!(p.is_initialized());
        assert_eq!(p.current_page(), Some(3));
        assert_eq!(p.plan().current_page(), Some(3));
    }

    #[test]
    fn initialize_propagates_config_errors() {
        let mut opts = options(95, 1);
        opts.per_page = 0;
        assert_eq!(
            initialize(&opts, NoopHooks).unwrap_err(),
            ConfigError::NonPositivePerPage(0)
        );
    }

    #[test]
    fn next_prev_click_move_and_clamp() {
        let mut p = initialize(&options(95, 1), NoopHooks).unwrap();
        p.next();
        assert_eq!(p.current_page(), Some(2));
        p.prev();
        p.prev();
        assert_eq!(p.current_page(), Some(1));
        p.click(500);
        assert_eq!(p.current_page(), Some(10));
        p.next();
        assert_eq!(p.current_page(), Some(10));
        p.click(0);
        assert_eq!(p.current_page(), Some(1));
    }

    #[test]
    fn events_before_init_are_ignored() {
        let calls = Rc::new(RefCell::new(0));
        let c = Rc::clone(&calls);
        let hooks = HookSet::new().on_next(move |_| {
            *c.borrow_mut() += 1;
            HookOutcome::Continue
        });
        let mut p = Paginator::new(&options(95, 1), hooks).unwrap();
        assert_eq!(
            p.dispatch(PageEvent::Next),
            Transition::Ignored {
                event: PageEvent::Next,
                reason: IgnoreReason::Uninitialized
            }
        );
        assert_eq!(*calls.borrow(), 0);
        assert!(p.plan().is_empty());
    }

    #[test]
    fn cancelled_init_stays_uninitialized_and_can_retry() {
        let allow = Rc::new(RefCell::new(false));
        let gate = Rc::clone(&allow);
        let hooks = HookSet::new().on_init(move |_| {
            if *gate.borrow() {
                HookOutcome::Continue
            } else {
                HookOutcome::Cancel
            }
        });
        let mut p = initialize(&options(95, 4), hooks).unwrap();
        assert!(!p.is_initialized());
        assert!(p.plan().is_empty());

        *allow.borrow_mut() = true;
        assert!(p.dispatch(PageEvent::Init).is_committed());
        assert_eq!(p.current_page(), Some(4));
    }

    #[test]
    fn change_hook_cannot_veto_first_render() {
        let hooks = HookSet::new().on_change(|_| HookOutcome::Cancel);
        let mut p = initialize(&options(95, 3), hooks).unwrap();
        assert!(p.is_initialized());
        assert_eq!(p.plan().current_page(), Some(3));
        assert_eq!(
            p.dispatch(PageEvent::Next),
            Transition::Cancelled {
                event: PageEvent::Next,
                by: HookStage::Change
            }
        );
        assert_eq!(p.current_page(), Some(3));
    }

    #[test]
    fn empty_list_ignores_navigation() {
        let mut p = Paginator::without_hooks(&options(0, 1)).unwrap();
        assert_eq!(
            p.dispatch(PageEvent::Init),
            Transition::Empty {
                event: PageEvent::Init
            }
        );
        assert!(p.is_initialized());
        assert_eq!(p.current_page(), None);
        assert_eq!(
            p.dispatch(PageEvent::Next),
            Transition::Ignored {
                event: PageEvent::Next,
                reason: IgnoreReason::NoPages
            }
        );
        assert!(p.plan().is_empty());
    }

    #[test]
    fn committed_transition_reports_pages() {
        let mut p = initialize(&options(1000, 50), NoopHooks).unwrap();
        assert_eq!(
            p.dispatch(PageEvent::Click(54)),
            Transition::Committed {
                event: PageEvent::Click(54),
                from: Some(50),
                to: 54
            }
        );
    }

    #[test]
    fn previous_config_is_not_mutated_by_commit() {
        let mut p = initialize(&options(95, 2), NoopHooks).unwrap();
        let before = p.config().cloned().unwrap();
        p.next();
        assert_eq!(before.current_page(), 2);
        assert_eq!(p.config().unwrap().current_page(), 3);
    }
}
