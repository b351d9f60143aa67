//! Drawing surfaces.
//!
//! Widgets draw through [`Surface`] instead of touching a [`Buffer`](super::Buffer)
//! directly, so the same drawing code can target the whole screen or a
//! clipped [`Region`] of it.

use super::Cell;
use crate::rect::Rect;
use crate::text::char_width;
use crate::types::Style;

/// Something cells can be written to, addressed by `(column, row)`.
///
/// Writes outside the surface bounds are dropped.
pub trait Surface {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Write a single cell.
    fn set_cell(&mut self, x: u16, y: u16, cell: Cell);

    fn set_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.set_cell(x, y, Cell::styled(ch, style));
    }

    /// Paint every cell of the surface with `ch`.
    fn fill(&mut self, ch: char, style: Style) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_char(x, y, ch, style);
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipping at the right edge.
    ///
    /// Double-width characters occupy two cells; the second is marked as a
    /// continuation. Returns the column after the last written cell.
    fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let width = char_width(ch);
            if width == 0 {
                continue;
            }
            if col as usize + width > self.width() as usize {
                break;
            }
            self.set_char(col, y, ch, style);
            for extra in 1..width as u16 {
                self.set_cell(col + extra, y, Cell::continuation(style));
            }
            col += width as u16;
        }
        col
    }
}

/// A clipped, translated view onto another surface.
///
/// Coordinates are relative to the region's top-left corner.
pub struct Region<'a, S: Surface + ?Sized> {
    inner: &'a mut S,
    area: Rect,
}

impl<'a, S: Surface + ?Sized> Region<'a, S> {
    /// Create a region, clamping `area` to the bounds of `inner`.
    pub fn new(inner: &'a mut S, area: Rect) -> Self {
        let x = area.x.min(inner.width());
        let y = area.y.min(inner.height());
        let width = area.width.min(inner.width() - x);
        let height = area.height.min(inner.height() - y);
        Self {
            inner,
            area: Rect::new(x, y, width, height),
        }
    }

    /// The area of the parent surface this region covers.
    pub fn area(&self) -> Rect {
        self.area
    }
}

impl<S: Surface + ?Sized> Surface for Region<'_, S> {
    fn width(&self) -> u16 {
        self.area.width
    }

    fn height(&self) -> u16 {
        self.area.height
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.area.width && y < self.area.height {
            self.inner.set_cell(self.area.x + x, self.area.y + y, cell);
        }
    }
}
