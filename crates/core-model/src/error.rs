use thiserror::Error;

/// Caller contract violations detected while validating `PaginationOptions`.
///
/// Out-of-range pages are not errors (they are clamped), and neither is an
/// empty item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("per_page must be greater than zero (got {0})")]
    NonPositivePerPage(i64),
    #[error("count must not be negative (got {0})")]
    NegativeCount(i64),
    #[error("render_pages must be at least 1 (got {0})")]
    EmptyWindow(i64),
    #[error("jump_buttons must not be negative (got {0}); use 0 to disable")]
    NegativeJumpButtons(i64),
    #[error("current item index must not be negative (got {0})")]
    NegativeItemIndex(i64),
}
