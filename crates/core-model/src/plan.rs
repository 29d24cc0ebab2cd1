use std::ops::RangeInclusive;

use serde::Serialize;

/// Contiguous `[start, end]` range of main page buttons.
///
/// `end < start` encodes an empty window (only possible with zero pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderWindow {
    pub start: usize,
    pub end: usize,
}

impl RenderWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }
}

/// Shortcut clusters shown apart from the main window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JumpSegments {
    /// Followed by a spacer.
    pub leading: Option<RangeInclusive<usize>>,
    /// Preceded by a spacer.
    pub trailing: Option<RangeInclusive<usize>>,
}

impl JumpSegments {
    pub fn none() -> Self {
        Self::default()
    }
}

/// One display element of a `RenderPlan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    PrevControl { enabled: bool },
    NextControl { enabled: bool },
    PageButton { page_number: usize, is_current: bool },
    JumpSpacer,
}

impl Slot {
    pub fn page(page_number: usize, is_current: bool) -> Self {
        Self::PageButton {
            page_number,
            is_current,
        }
    }

    /// Page a click on this slot would request, if it is a page button.
    pub fn page_number(&self) -> Option<usize> {
        match self {
            Self::PageButton { page_number, .. } => Some(*page_number),
            _ => None,
        }
    }
}

/// Ordered display plan; slot order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    slots: Vec<Slot>,
}

impl RenderPlan {
    pub const fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Page numbers of every page button, in display order (duplicates kept).
    pub fn page_numbers(&self) -> Vec<usize> {
        self.slots.iter().filter_map(Slot::page_number).collect()
    }

    /// The page flagged as current, if any page button carries the flag.
    pub fn current_page(&self) -> Option<usize> {
        self.slots.iter().find_map(|slot| match slot {
            Slot::PageButton {
                page_number,
                is_current: true,
            } => Some(*page_number),
            _ => None,
        })
    }

    pub fn spacer_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::JumpSpacer))
            .count()
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
