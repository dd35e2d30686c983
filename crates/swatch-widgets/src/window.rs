#![forbid(unsafe_code)]

//! Keep-in-view pagination window.
//!
//! [`PageWindow`] tracks the first visible index of a fixed-size window over a
//! list. When the selection moves, the window scrolls by the smallest amount
//! that keeps it visible instead of recentring.
//!
//! # Invariants
//!
//! After [`reposition(i)`](PageWindow::reposition) with `i` in bounds:
//! `start <= i <= start + page_size - 1`.
//!
//! # Repositioning rules
//!
//! With `lower = start` and `upper = start + page_size`:
//!
//! | Selection                  | Effect                  |
//! |----------------------------|-------------------------|
//! | `lower <= i < upper - 1`   | unchanged               |
//! | `i == upper`               | `start += 1`            |
//! | `i == lower - 1`           | `start -= 1`            |
//! | anything else              | snap to the first page, or so `i` sits in the last slot |
//!
//! The last slot (`i == upper - 1`) goes through the snap arm. The snap lands
//! on the same `start` in that case, so the window does not visibly move.

use std::num::NonZeroUsize;
use std::ops::Range;

/// How a [`PageWindow`] moved during a reposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowMove {
    Unchanged,
    /// Scrolled one entry toward the end.
    StepForward,
    /// Scrolled one entry toward the start.
    StepBack,
    /// Jumped to a computed start.
    Snap,
}

/// Fixed-size window over an indexable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: usize,
    page_size: NonZeroUsize,
}

impl PageWindow {
    /// A window of `page_size` entries starting at index 0.
    pub const fn new(page_size: NonZeroUsize) -> Self {
        Self {
            start: 0,
            page_size,
        }
    }

    /// First visible index.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Change the page size. The start is left alone; call
    /// [`reposition`](Self::reposition) afterwards to restore the invariant.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.start = 0;
    }

    /// Whether `index` is inside the window.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.page_size.get()
    }

    /// Move the window so that `index` is visible.
    pub fn reposition(&mut self, index: usize) -> WindowMove {
        let size = self.page_size.get();
        let lower = self.start;
        let upper = self.start + size;

        let moved = if index >= lower && index + 1 < upper {
            WindowMove::Unchanged
        } else if index == upper {
            self.start += 1;
            WindowMove::StepForward
        } else if index + 1 == lower {
            self.start -= 1;
            WindowMove::StepBack
        } else {
            self.start = if index < size { 0 } else { index - size + 1 };
            WindowMove::Snap
        };

        swatch_core::trace!(
            index,
            start = self.start,
            page_size = size,
            moved = ?moved,
            "window repositioned"
        );
        moved
    }

    /// Visible index range for a list of `len` entries.
    ///
    /// Empty when the list is empty or the window starts past its end.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = (self.start + self.page_size.get()).min(len);
        start..end
    }

    /// Visible slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}
