//! Jump segment placement.
//!
//! Jump segments are small clusters of shortcut buttons at the extremes of the
//! page list, separated from the main window by a spacer.
//!
//! * Leading: shown when the current page lies past the middle of the list
//!   (`current_page > last_page / 2`), the window does not already start at
//!   the first page, and there are more pages than jump buttons. It spans
//!   `first_page ..= jump_buttons + 1`; the extra button overlaps the main
//!   window by one page and that overlap is kept as is.
//! * Trailing: shown when the list is wider than the window and the window
//!   ends before the first trailing jump button
//!   (`max(first_page, last_page - jump_buttons + 1)`). It spans that button
//!   through `last_page`.
//!
//! A disabled policy never produces segments.

use core_model::{JumpButtons, JumpSegments, RenderWindow};

pub fn compute_jump_segments(
    current_page: usize,
    last_page: usize,
    window: RenderWindow,
    render_pages: usize,
    jump_buttons: JumpButtons,
    first_page: usize,
) -> JumpSegments {
    let Some(per_end) = jump_buttons.per_end() else {
        return JumpSegments::none();
    };

    // `current_page > last_page / 2` without losing the half page.
    let past_middle = current_page * 2 > last_page;
    let leading = (past_middle && window.start > first_page && last_page > per_end)
        .then(|| first_page..=per_end + 1);

    let first_jump_button = first_jump_button(last_page, per_end, first_page);
    let trailing = (last_page > render_pages && window.end < first_jump_button)
        .then(|| first_jump_button..=last_page);

    JumpSegments { leading, trailing }
}

/// First page of the trailing segment: `max(first_page, last_page - per_end + 1)`.
pub fn first_jump_button(last_page: usize, per_end: usize, first_page: usize) -> usize {
    (last_page + 1).saturating_sub(per_end).max(first_page)
}
