//! Main page window calculation.
//!
//! The window is the contiguous run of page buttons around the current page.
//! It is centered on the current page where possible and shifted back toward
//! the first page when it would run off the end of the list:
//!
//! 1. `center_offset = ceil((render_pages - 1) / 2)`
//! 2. `start = max(first_page, current_page - center_offset)`
//! 3. `end = min(last_page, start + render_pages - 1)`
//! 4. `fill = render_pages - (end - start + 1)` (shortfall near the end)
//! 5. `start = max(first_page, start - fill)`
//!
//! Guarantees:
//! * `window.len() <= render_pages`.
//! * `window.len() == render_pages` whenever `last_page >= render_pages`.
//! * With `last_page == 0` the window is empty (`end < start`).

use core_model::RenderWindow;
use tracing::trace;

/// Compute the `[start, end]` window of main page buttons.
pub fn compute_range(
    current_page: usize,
    render_pages: usize,
    last_page: usize,
    first_page: usize,
) -> RenderWindow {
    let center_offset = render_pages.saturating_sub(1).div_ceil(2);

    let start = current_page.saturating_sub(center_offset).max(first_page);
    let end = last_page.min(start + render_pages.saturating_sub(1));

    let shown = (end + 1).saturating_sub(start);
    let page_fill = render_pages.saturating_sub(shown);
    // Zero fill leaves `start` unchanged, so no branch is needed.
    let start = start.saturating_sub(page_fill).max(first_page);

    trace!(
        target: "pagination.window",
        current_page,
        render_pages,
        last_page,
        center_offset,
        page_fill,
        start,
        end,
        "window_computed"
    );
    RenderWindow::new(start, end)
}
