//! Row-based scroll metrics for vertically scrollable panes.
//!
//! Tracks content height, viewport height and the current offset, all in
//! terminal rows so values can feed `Paragraph::scroll` directly.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Returns the maximum valid scroll offset.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Returns whether content exceeds the current viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// Updates both dimensions and clamps the current offset.
    pub fn update_extent(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.clamp(self.offset);
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i16) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let current = i32::from(self.offset);
        let max = i32::from(self.max_offset());
        self.offset = (current + i32::from(delta)).clamp(0, max) as u16;
    }

    /// Moves to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = self.clamp(offset);
    }

    pub fn clamp(&self, offset: u16) -> u16 {
        offset.min(self.max_offset())
    }
}
