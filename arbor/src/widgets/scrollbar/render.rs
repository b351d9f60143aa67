//! Scrollbar rendering.

use arbor_term::{Surface, ThemeDefinition};

use super::types::{SCROLLBAR_THUMB, SCROLLBAR_TRACK, ScrollbarGeometry};
use super::ScrollBar;

/// Handle size and position for a track of `track_len` cells.
pub(crate) fn handle_metrics(track_len: u16, maximum: usize, view_size: usize, position: usize) -> (u16, u16) {
    let visible_ratio = view_size as f32 / maximum.max(1) as f32;
    let handle_size = ((track_len as f32 * visible_ratio).ceil() as u16)
        .max(1)
        .min(track_len);

    let scrollable_range = maximum.saturating_sub(view_size);
    let handle_range = track_len.saturating_sub(handle_size);

    let handle_pos = if scrollable_range > 0 {
        let ratio = position.min(scrollable_range) as f32 / scrollable_range as f32;
        (ratio * handle_range as f32).round() as u16
    } else {
        0
    };
    (handle_pos, handle_size)
}

impl ScrollBar {
    /// Draw the scrollbar down the first column of `surface` and return its
    /// geometry in surface coordinates.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        theme: &ThemeDefinition,
    ) -> Option<ScrollbarGeometry> {
        let height = surface.height();
        if surface.width() == 0 || height == 0 {
            return None;
        }

        let track = theme.character(SCROLLBAR_TRACK, '│');
        let thumb = theme.character(SCROLLBAR_THUMB, '█');
        let (handle_pos, handle_size) =
            handle_metrics(height, self.maximum(), self.view_size(), self.position());

        for y in 0..height {
            if y >= handle_pos && y < handle_pos + handle_size {
                surface.set_char(0, y, thumb, theme.active());
            } else {
                surface.set_char(0, y, track, theme.normal());
            }
        }

        Some(ScrollbarGeometry {
            x: 0,
            y: 0,
            width: 1,
            height,
            handle_pos,
            handle_size,
        })
    }
}
