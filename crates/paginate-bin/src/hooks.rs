use core_events::{Candidate, HookOutcome, PaginationHooks};
use tracing::info;

/// Hooks used by the binary: never cancel, record the first render and every
/// page change together with the item range it selects.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceHooks;

impl PaginationHooks for TraceHooks {
    fn on_init(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        info!(
            target: "runtime.pager",
            page = candidate.new_page(),
            last_page = candidate.last_page(),
            first_item = candidate.config.first_item_index(),
            "first_render"
        );
        HookOutcome::Continue
    }

    fn on_change(&mut self, candidate: &Candidate<'_>) -> HookOutcome {
        info!(
            target: "runtime.pager",
            event = candidate.event.name(),
            from = candidate.previous_page,
            to = candidate.new_page(),
            last_page = candidate.last_page(),
            first_item = candidate.config.first_item_index(),
            noop = candidate.is_noop(),
            "page_change"
        );
        HookOutcome::Continue
    }
}
