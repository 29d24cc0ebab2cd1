//! Render plan assembly.
//!
//! Display order:
//! 1. previous control (disabled on the first page, absent when hidden by policy)
//! 2. leading jump buttons, then a spacer
//! 3. main window page buttons (current page flagged)
//! 4. a spacer, then trailing jump buttons
//! 5. next control (disabled on the last page, absent when hidden by policy)
//!
//! An empty item list produces an empty plan: no controls, no buttons.

use core_model::{PaginationConfig, RenderPlan, Slot};
use tracing::debug;

use crate::jump::compute_jump_segments;
use crate::window::compute_range;

pub fn build(config: &PaginationConfig) -> RenderPlan {
    if config.is_empty() {
        debug!(target: "pagination.plan", "plan_empty");
        return RenderPlan::empty();
    }

    let first_page = config.first_page();
    let last_page = config.last_page();
    let current_page = config.current_page();

    let window = compute_range(current_page, config.render_pages(), last_page, first_page);
    let segments = compute_jump_segments(
        current_page,
        last_page,
        window,
        config.render_pages(),
        config.jump_buttons(),
        first_page,
    );

    let mut slots = Vec::with_capacity(window.len() + 8);

    if config.prev_control().is_shown() {
        slots.push(Slot::PrevControl {
            enabled: current_page != first_page,
        });
    }

    if let Some(leading) = segments.leading.clone() {
        slots.extend(leading.map(|page| Slot::page(page, page == current_page)));
        slots.push(Slot::JumpSpacer);
    }

    slots.extend(window.pages().map(|page| Slot::page(page, page == current_page)));

    if let Some(trailing) = segments.trailing.clone() {
        slots.push(Slot::JumpSpacer);
        slots.extend(trailing.map(|page| Slot::page(page, page == current_page)));
    }

    if config.next_control().is_shown() {
        slots.push(Slot::NextControl {
            enabled: current_page != last_page,
        });
    }

    debug!(
        target: "pagination.plan",
        current_page,
        last_page,
        window_start = window.start,
        window_end = window.end,
        leading = segments.leading.is_some(),
        trailing = segments.trailing.is_some(),
        slots = slots.len(),
        "plan_built"
    );
    RenderPlan::from_slots(slots)
}
