//! Vertical scrollbar shown beside a tree whose content outgrows its window.

mod render;
mod types;

pub use types::{SCROLLBAR_THUMB, SCROLLBAR_TRACK, ScrollbarGeometry};

/// Scroll extent, viewport size and offset, all in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollBar {
    maximum: usize,
    view_size: usize,
    position: usize,
}

impl ScrollBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scroll_maximum(&mut self, maximum: usize) {
        self.maximum = maximum;
    }

    pub fn set_view_size(&mut self, view_size: usize) {
        self.view_size = view_size;
    }

    pub fn set_scroll_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }

    pub fn view_size(&self) -> usize {
        self.view_size
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Handle `(position, size)` on a track of `track_len` cells.
    pub fn handle(&self, track_len: u16) -> (u16, u16) {
        render::handle_metrics(track_len, self.maximum, self.view_size, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_fills_track_when_everything_fits() {
        let mut bar = ScrollBar::new();
        bar.set_scroll_maximum(3);
        bar.set_view_size(5);
        assert_eq!(bar.handle(5), (0, 5));
    }

    #[test]
    fn handle_moves_to_the_end() {
        let mut bar = ScrollBar::new();
        bar.set_scroll_maximum(20);
        bar.set_view_size(5);
        assert_eq!(bar.handle(5), (0, 2));

        bar.set_scroll_position(15);
        assert_eq!(bar.handle(5), (3, 2));

        // Positions past the end are clamped.
        bar.set_scroll_position(40);
        assert_eq!(bar.handle(5), (3, 2));
    }
}
