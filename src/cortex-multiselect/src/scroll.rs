//! Viewport over the filtered option rows.
//!
//! The coordinator keeps `total` equal to the filtered count and asks the
//! viewport to bring the active row into view with the least movement.

/// Scroll position of the option list.
///
/// # Example
///
/// ```rust
/// use cortex_multiselect::scroll::ScrollState;
///
/// let mut scroll = ScrollState::new(30, 10); // 30 rows, 10 visible
///
/// scroll.ensure_visible(12);
/// assert_eq!(scroll.offset(), 3); // row 12 is now the last visible row
///
/// scroll.ensure_visible(5);
/// assert_eq!(scroll.offset(), 3); // already visible, nothing moves
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Total number of rows
    total: usize,
    /// Number of rows visible at once
    visible: usize,
    /// Index of the first visible row
    offset: usize,
}

impl ScrollState {
    /// Create a viewport at the top of `total` rows.
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible,
            offset: 0,
        }
    }

    /// Get the current scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the total number of rows.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get the number of visible rows.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Set the total number of rows.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_offset();
    }

    /// Set the number of visible rows.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp_offset();
    }

    /// Bring row `index` into view, moving as little as possible.
    ///
    /// Returns true if the offset changed.
    pub fn ensure_visible(&mut self, index: usize) -> bool {
        if self.visible == 0 {
            return false;
        }
        let before = self.offset;
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index.saturating_sub(self.visible - 1);
        }
        self.clamp_offset();
        self.offset != before
    }

    /// Check if row `index` is currently visible.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.visible && index < self.total
    }

    /// Range of currently visible rows.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.visible).min(self.total);
        start..end.max(start)
    }

    fn clamp_offset(&mut self) {
        if self.total <= self.visible {
            self.offset = 0;
        } else {
            self.offset = self.offset.min(self.total - self.visible);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 10)
    }
}
