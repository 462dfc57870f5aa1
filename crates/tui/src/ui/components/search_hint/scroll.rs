//! The "bring item into view" capability used by the hint panel.
//!
//! The panel only decides *when* and *which* item must become visible; how
//! the viewport moves is up to the [`ScrollIntoView`] implementation.

/// Vertical position of a rendered item, in content rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemExtent {
    pub top: u16,
    pub height: u16,
}

impl ItemExtent {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains_row(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate towards the target over several ticks.
    #[default]
    Smooth,
    Instant,
}

/// Where the item should end up inside the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBlock {
    #[default]
    Center,
    Start,
    Nearest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

pub trait ScrollIntoView {
    /// Make `item` visible. Requests are fire-and-forget: a later request
    /// replaces one still in progress.
    fn scroll_into_view(&mut self, item: ItemExtent, options: ScrollIntoViewOptions);

    /// Report the measured content and viewport heights.
    fn set_extent(&mut self, _content_height: u16, _viewport_height: u16) {}

    /// Current first visible content row.
    fn offset(&self) -> u16 {
        0
    }

    /// User-driven scrolling (mouse wheel).
    fn scroll_lines(&mut self, _delta: i16) {}
}
