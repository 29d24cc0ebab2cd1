use core_events::PageEvent;
use serde::Serialize;

/// Which hook vetoed a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HookStage {
    /// `on_init` / `on_click` / `on_next` / `on_prev`.
    Event,
    Change,
}

/// Why an event was not applied at all (no hooks were consulted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    /// The first render has not happened yet (or was cancelled).
    Uninitialized,
    /// The item list is empty; there is no page to move to.
    NoPages,
}

/// Result of dispatching a single `PageEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    /// The candidate was committed and the plan rebuilt. `from == to` for a
    /// clamped no-op such as `Prev` on the first page.
    Committed {
        event: PageEvent,
        from: Option<usize>,
        to: usize,
    },
    /// A hook vetoed; state and plan are unchanged.
    Cancelled { event: PageEvent, by: HookStage },
    /// `Init` on an empty list: `on_init` ran, the plan is empty.
    Empty { event: PageEvent },
    Ignored {
        event: PageEvent,
        reason: IgnoreReason,
    },
}

impl Transition {
    pub fn is_committed(&self) -> bool {
        matches!(self, Transition::Committed { .. })
    }
}
