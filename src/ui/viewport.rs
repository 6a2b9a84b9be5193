//! Scrollable body geometry.
//!
//! The [`Viewport`] tracks the size of the body region between the header
//! and the footer, how many lines of formatted content there are, and how
//! far down the user has scrolled.

use std::ops::Range;

/// Geometry of the scrollable body.
///
/// # Example
///
/// ```
/// use dadjoke_tui::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 20, 50);
/// assert_eq!(vp.visible_range(), 0..20);
///
/// vp.scroll_down(10);
/// assert_eq!(vp.visible_range(), 10..30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    y_offset: usize,
    content_lines: usize,
}

impl Viewport {
    /// Create a viewport scrolled to the top.
    pub const fn new(width: u16, height: u16, content_lines: usize) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            content_lines,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Index of the first visible content line.
    pub const fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub const fn content_lines(&self) -> usize {
        self.content_lines
    }

    /// Content lines currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.y_offset + self.height as usize).min(self.content_lines);
        self.y_offset.min(end)..end
    }

    pub const fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub const fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_add(n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn half_page_up(&mut self) {
        self.scroll_up(self.height as usize / 2);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down(self.height as usize / 2);
    }

    pub const fn go_to_top(&mut self) {
        self.y_offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.y_offset = self.max_offset();
    }

    /// Change the on-screen size. The scroll offset is kept unless the
    /// content no longer reaches that far.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.y_offset = self.y_offset.min(self.max_offset());
    }

    /// Swap in new content and jump back to the top.
    pub const fn replace_content(&mut self, content_lines: usize) {
        self.content_lines = content_lines;
        self.y_offset = 0;
    }

    const fn max_offset(&self) -> usize {
        self.content_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(80, 20, 100);
        assert_eq!(vp.y_offset(), 0);
        assert!(vp.at_top());
    }

    #[test]
    fn test_visible_range_with_short_content() {
        let vp = Viewport::new(80, 20, 7);
        assert_eq!(vp.visible_range(), 0..7);
    }

    #[test]
    fn test_visible_range_with_no_content() {
        let vp = Viewport::new(80, 20, 0);
        assert_eq!(vp.visible_range(), 0..0);
        assert!(vp.at_bottom());
    }

    #[test]
    fn test_scroll_down_clamps_to_max() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.scroll_down(1000);
        assert_eq!(vp.y_offset(), 80);
        assert!(vp.at_bottom());
    }

    #[test]
    fn test_scroll_up_clamps_to_zero() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.scroll_down(10);
        vp.scroll_up(100);
        assert_eq!(vp.y_offset(), 0);
    }

    #[test]
    fn test_page_and_half_page_moves() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.page_down();
        assert_eq!(vp.y_offset(), 20);
        vp.half_page_down();
        assert_eq!(vp.y_offset(), 30);
        vp.half_page_up();
        assert_eq!(vp.y_offset(), 20);
        vp.page_up();
        assert_eq!(vp.y_offset(), 0);
    }

    #[test]
    fn test_go_to_bottom_and_top() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.go_to_bottom();
        assert_eq!(vp.visible_range(), 80..100);
        vp.go_to_top();
        assert_eq!(vp.visible_range(), 0..20);
    }

    #[test]
    fn test_resize_preserves_offset_when_still_valid() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.scroll_down(30);
        vp.resize(120, 25);
        assert_eq!(vp.y_offset(), 30);
        assert_eq!(vp.width(), 120);
        assert_eq!(vp.height(), 25);
    }

    #[test]
    fn test_resize_clamps_offset_when_content_fits() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.scroll_down(70);
        vp.resize(80, 60);
        assert_eq!(vp.y_offset(), 40);
    }

    #[test]
    fn test_replace_content_returns_to_top() {
        let mut vp = Viewport::new(80, 20, 100);
        vp.scroll_down(50);
        vp.replace_content(10);
        assert_eq!(vp.y_offset(), 0);
        assert_eq!(vp.content_lines(), 10);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scroll_never_exceeds_bounds(
                content_lines in 0..10000usize,
                height in 1..100u16,
                scroll_amount in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, content_lines);
                vp.scroll_down(scroll_amount);

                let max = content_lines.saturating_sub(height as usize);
                prop_assert!(vp.y_offset() <= max);
            }

            #[test]
            fn visible_range_within_bounds(
                content_lines in 0..10000usize,
                height in 0..100u16,
                offset in 0..10000usize,
                new_height in 0..100u16,
            ) {
                let mut vp = Viewport::new(80, height, content_lines);
                vp.scroll_down(offset);
                vp.resize(80, new_height);

                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= content_lines);
                prop_assert!(range.len() <= new_height as usize);
            }
        }
    }
}
