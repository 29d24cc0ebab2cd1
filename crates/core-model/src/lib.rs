//! Pagination data model.
//!
//! Everything the calculators and the transition controller exchange lives
//! here so the other crates agree on one vocabulary:
//!
//! * `PaginationOptions`: raw, caller-facing settings (signed integers so a
//!   config file or CLI flag can express an invalid value that we then reject).
//! * `PaginationConfig`: the validated value owned by a controller. It is
//!   replaced, never mutated, on every committed transition.
//! * `RenderWindow` / `JumpSegments`: intermediate calculator results.
//! * `RenderPlan` / `Slot`: the ordered display plan handed to a renderer.
//!
//! Invariants:
//! * `FIRST_PAGE == 1`; page numbers are 1-based everywhere.
//! * `last_page(count, per_page) == count.div_ceil(per_page)`, so `0` iff
//!   `count == 0`.
//! * A validated config always has `per_page >= 1` and `render_pages >= 1`.
//! * For `count > 0`, `FIRST_PAGE <= current_page <= last_page`.
//!
//! `DerivedState` (the last page) is recomputed from the config on demand and
//! never stored alongside it.

mod error;
mod options;
mod plan;

pub use error::ConfigError;
pub use options::{
    ControlPolicy, DEFAULT_JUMP_BUTTONS, DEFAULT_PER_PAGE, DEFAULT_RENDER_PAGES, JumpButtons,
    PaginationConfig, PaginationOptions,
};
pub use plan::{JumpSegments, RenderPlan, RenderWindow, Slot};

/// Default label of the previous-page control.
pub const DEFAULT_PREV_LABEL: &str = "«";
/// Default label of the next-page control.
pub const DEFAULT_NEXT_LABEL: &str = "»";
/// Default text between a jump segment and the main window.
pub const DEFAULT_SPACER_LABEL: &str = " ... ";

/// First valid page number. Not configurable.
pub const FIRST_PAGE: usize = 1;

/// Highest valid page number for `count` items split into pages of `per_page`.
///
/// Returns `0` when there are no items. `per_page` must be non-zero; validated
/// configs guarantee this.
pub fn last_page(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page)
}
