//! Scrollbar types.

/// Theme key for the track character.
pub const SCROLLBAR_TRACK: &str = "SCROLLBAR_TRACK";
/// Theme key for the handle character.
pub const SCROLLBAR_THUMB: &str = "SCROLLBAR_THUMB";

/// Scrollbar geometry for hit testing and rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    /// X position of the scrollbar track.
    pub x: u16,
    /// Y position of the scrollbar track.
    pub y: u16,
    pub width: u16,
    /// Track length.
    pub height: u16,
    /// Position of the handle within the track (0-based).
    pub handle_pos: u16,
    /// Size of the handle.
    pub handle_size: u16,
}

impl ScrollbarGeometry {
    /// Check if a point is within the scrollbar track.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Check if a point is on the handle.
    pub fn handle_contains(&self, x: u16, y: u16) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let rel_y = y - self.y;
        rel_y >= self.handle_pos && rel_y < self.handle_pos + self.handle_size
    }
}
