//! Terminal viewport for the hint panel with animated scrolling.

use tracing::trace;

use super::scroll::{ItemExtent, ScrollBehavior, ScrollBlock, ScrollIntoView, ScrollIntoViewOptions};
use crate::ui::components::common::ScrollMetrics;

/// Scroll state of the hint list. Smooth requests set a target offset that
/// [`HintViewport::tick`] approaches, covering half the remaining distance
/// per tick.
#[derive(Debug, Clone, Default)]
pub struct HintViewport {
    metrics: ScrollMetrics,
    target: Option<u16>,
}

impl HintViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<u16> {
        self.target
    }

    /// Advance a running animation by one step. Returns `true` when the
    /// offset changed.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let target = self.metrics.clamp(target);
        let current = self.metrics.offset();
        if current == target {
            self.target = None;
            return false;
        }

        let distance = current.abs_diff(target);
        let step = (distance / 2).max(1);
        let next = if target > current { current + step } else { current - step };
        self.metrics.scroll_to(next);
        if self.metrics.offset() == target {
            self.target = None;
        }
        true
    }

    fn target_offset(&self, item: ItemExtent, block: ScrollBlock) -> u16 {
        let viewport = self.metrics.viewport_height();
        let offset = match block {
            ScrollBlock::Center => (item.top + item.height / 2).saturating_sub(viewport / 2),
            ScrollBlock::Start => item.top,
            ScrollBlock::Nearest => {
                let current = self.metrics.offset();
                if item.top < current {
                    item.top
                } else if item.bottom() > current.saturating_add(viewport) {
                    item.bottom().saturating_sub(viewport)
                } else {
                    current
                }
            }
        };
        self.metrics.clamp(offset)
    }
}

impl ScrollIntoView for HintViewport {
    fn scroll_into_view(&mut self, item: ItemExtent, options: ScrollIntoViewOptions) {
        let target = self.target_offset(item, options.block);
        trace!(top = item.top, target, ?options, "scroll into view");
        match options.behavior {
            ScrollBehavior::Instant => {
                self.target = None;
                self.metrics.scroll_to(target);
            }
            ScrollBehavior::Smooth if target == self.metrics.offset() => self.target = None,
            ScrollBehavior::Smooth => self.target = Some(target),
        }
    }

    fn set_extent(&mut self, content_height: u16, viewport_height: u16) {
        self.metrics.update_extent(content_height, viewport_height);
    }

    fn offset(&self) -> u16 {
        self.metrics.offset()
    }

    fn scroll_lines(&mut self, delta: i16) {
        self.target = None;
        self.metrics.scroll_lines(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(content: u16, height: u16) -> HintViewport {
        let mut viewport = HintViewport::new();
        viewport.set_extent(content, height);
        viewport
    }

    fn instant(block: ScrollBlock) -> ScrollIntoViewOptions {
        ScrollIntoViewOptions {
            behavior: ScrollBehavior::Instant,
            block,
        }
    }

    #[test]
    fn centers_item_in_viewport() {
        let mut viewport = viewport(20, 5);
        viewport.scroll_into_view(ItemExtent::new(10, 1), instant(ScrollBlock::Center));
        assert_eq!(viewport.offset(), 8);
    }

    #[test]
    fn centering_clamps_at_edges() {
        let mut viewport = viewport(20, 5);
        viewport.scroll_into_view(ItemExtent::new(1, 1), instant(ScrollBlock::Center));
        assert_eq!(viewport.offset(), 0);
        viewport.scroll_into_view(ItemExtent::new(19, 1), instant(ScrollBlock::Center));
        assert_eq!(viewport.offset(), 15);
    }

    #[test]
    fn nearest_only_moves_when_hidden() {
        let mut viewport = viewport(20, 5);
        viewport.scroll_into_view(ItemExtent::new(3, 1), instant(ScrollBlock::Nearest));
        assert_eq!(viewport.offset(), 0);
        viewport.scroll_into_view(ItemExtent::new(7, 1), instant(ScrollBlock::Nearest));
        assert_eq!(viewport.offset(), 3);
    }

    #[test]
    fn smooth_scroll_converges_over_ticks() {
        let mut viewport = viewport(40, 6);
        viewport.scroll_into_view(ItemExtent::new(30, 1), ScrollIntoViewOptions::default());
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.target(), Some(27));

        let mut ticks = 0;
        while viewport.tick() {
            ticks += 1;
            assert!(ticks < 20, "animation did not settle");
        }
        assert_eq!(viewport.offset(), 27);
        assert!(!viewport.is_animating());
        assert!(ticks > 1);
    }

    #[test]
    fn new_request_retargets_animation() {
        let mut viewport = viewport(40, 6);
        viewport.scroll_into_view(ItemExtent::new(30, 1), ScrollIntoViewOptions::default());
        viewport.tick();
        viewport.scroll_into_view(ItemExtent::new(2, 1), ScrollIntoViewOptions::default());
        assert_eq!(viewport.target(), Some(0));
        while viewport.tick() {}
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn wheel_scroll_cancels_animation() {
        let mut viewport = viewport(40, 6);
        viewport.scroll_into_view(ItemExtent::new(30, 1), ScrollIntoViewOptions::default());
        viewport.scroll_lines(2);
        assert!(!viewport.is_animating());
        assert_eq!(viewport.offset(), 2);
    }
}
