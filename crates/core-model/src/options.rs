use serde::{Deserialize, Serialize};

use crate::{ConfigError, FIRST_PAGE, last_page};

pub const DEFAULT_RENDER_PAGES: usize = 10;
pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_JUMP_BUTTONS: usize = 1;

/// Caller-facing settings, before validation.
///
/// Integers are signed so that a config file or flag carrying a negative value
/// reaches `validate` and is reported as a `ConfigError` instead of failing
/// deep inside deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationOptions {
    /// Total number of items.
    pub count: i64,
    /// 1-based page to show. Clamped into the valid page range.
    pub current_page: i64,
    /// 0-based item index. When present it wins over `current_page`.
    pub current: Option<i64>,
    /// Width of the main window, in page buttons.
    pub render_pages: i64,
    pub per_page: i64,
    /// Shortcut buttons at each end of the list; `0` disables them.
    pub jump_buttons: i64,
    pub prev_button: bool,
    pub next_button: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            count: 0,
            current_page: FIRST_PAGE as i64,
            current: None,
            render_pages: DEFAULT_RENDER_PAGES as i64,
            per_page: DEFAULT_PER_PAGE as i64,
            jump_buttons: DEFAULT_JUMP_BUTTONS as i64,
            prev_button: true,
            next_button: true,
        }
    }
}

impl PaginationOptions {
    /// Check the caller contract and produce the config a controller owns.
    ///
    /// The item index (`current`) is folded into `current_page` here and does
    /// not survive into the config. The resulting page is clamped into
    /// `[FIRST_PAGE, last_page]`; with no items it stays at `FIRST_PAGE`.
    pub fn validate(&self) -> Result<PaginationConfig, ConfigError> {
        if self.per_page <= 0 {
            return Err(ConfigError::NonPositivePerPage(self.per_page));
        }
        if self.count < 0 {
            return Err(ConfigError::NegativeCount(self.count));
        }
        if self.render_pages < 1 {
            return Err(ConfigError::EmptyWindow(self.render_pages));
        }
        if self.jump_buttons < 0 {
            return Err(ConfigError::NegativeJumpButtons(self.jump_buttons));
        }
        let per_page = self.per_page as usize;
        let count = self.count as usize;

        let requested = match self.current {
            Some(index) if index < 0 => return Err(ConfigError::NegativeItemIndex(index)),
            Some(index) => index as usize / per_page + 1,
            None => self.current_page.max(0) as usize,
        };

        let config = PaginationConfig {
            count,
            per_page,
            current_page: FIRST_PAGE,
            render_pages: self.render_pages as usize,
            jump_buttons: JumpButtons::from_count(self.jump_buttons as usize),
            prev_control: ControlPolicy::from_flag(self.prev_button),
            next_control: ControlPolicy::from_flag(self.next_button),
        };
        Ok(config.with_current_page(requested))
    }
}

/// Shortcut-button policy at each end of the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JumpButtons {
    Disabled,
    /// Always non-zero; build through `from_count`.
    PerEnd(usize),
}

impl JumpButtons {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::Disabled
        } else {
            Self::PerEnd(count)
        }
    }

    pub fn per_end(self) -> Option<usize> {
        match self {
            Self::Disabled => None,
            Self::PerEnd(n) => Some(n),
        }
    }
}

/// Whether a prev/next control is part of the plan at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControlPolicy {
    Shown,
    Hidden,
}

impl ControlPolicy {
    pub fn from_flag(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Validated pagination settings.
///
/// Fields are private: the only ways to obtain a config are
/// `PaginationOptions::validate` and `with_current_page`, both of which keep
/// the invariants documented on the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationConfig {
    count: usize,
    per_page: usize,
    current_page: usize,
    render_pages: usize,
    jump_buttons: JumpButtons,
    prev_control: ControlPolicy,
    next_control: ControlPolicy,
}

impl PaginationConfig {
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn per_page(&self) -> usize {
        self.per_page
    }
    pub fn current_page(&self) -> usize {
        self.current_page
    }
    pub fn render_pages(&self) -> usize {
        self.render_pages
    }
    pub fn jump_buttons(&self) -> JumpButtons {
        self.jump_buttons
    }
    pub fn prev_control(&self) -> ControlPolicy {
        self.prev_control
    }
    pub fn next_control(&self) -> ControlPolicy {
        self.next_control
    }
    pub fn first_page(&self) -> usize {
        FIRST_PAGE
    }

    /// Derived, recomputed on every call.
    pub fn last_page(&self) -> usize {
        last_page(self.count, self.per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clamp `page` into `[FIRST_PAGE, last_page]`. With no pages the result
    /// is `FIRST_PAGE`.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.last_page()).max(FIRST_PAGE)
    }

    /// New config showing `page` (clamped). `self` is left untouched.
    pub fn with_current_page(&self, page: usize) -> Self {
        Self {
            current_page: self.clamp_page(page),
            ..self.clone()
        }
    }

    /// 0-based index of the first item on the current page.
    pub fn first_item_index(&self) -> usize {
        (self.current_page - FIRST_PAGE) * self.per_page
    }
}
