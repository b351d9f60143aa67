//! Tree rendering.
//!
//! Each row is laid out as `[m] label`: left bracket, marker, right bracket,
//! a gap, then the label, shifted right by `indent * level`. Without
//! brackets the marker and label move one and two cells left respectively.

use arbor_term::text::display_width;
use arbor_term::{Rect, Region, Surface, ThemeDefinition};
use log::trace;

use crate::error::TreeError;
use crate::node::NodeId;
use crate::widgets::scrollbar::{ScrollBar, ScrollbarGeometry};

use super::state::TreeView;

pub const LEFT_BRACKET: &str = "LEFT_BRACKET";
pub const RIGHT_BRACKET: &str = "RIGHT_BRACKET";
pub const EXPANDED_MARKER: &str = "EXPANDED_MARKER";
pub const COLLAPSED_MARKER: &str = "COLLAPSED_MARKER";
pub const LEAF_MARKER: &str = "LEAF_MARKER";
pub const TREE_LEVEL_INDENT: &str = "TREE_LEVEL_INDENT";
pub const DISPLAY_BRACKETS: &str = "DISPLAY_BRACKETS";
pub const DISPLAY_BLOCK: &str = "DISPLAY_BLOCK";
pub const DISPLAY_BLOCK_FILLER: &str = "DISPLAY_BLOCK_FILLER";

pub const DEFAULT_TREE_LEVEL_INDENT: i32 = 1;

/// Draws a [`TreeView`] and its scrollbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRenderer {
    indent: usize,
    display_brackets: bool,
    display_block: bool,
    scrollbar: ScrollBar,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self {
            indent: DEFAULT_TREE_LEVEL_INDENT as usize,
            display_brackets: true,
            display_block: false,
            scrollbar: ScrollBar::new(),
        }
    }
}

/// Convert a computed column to a surface coordinate, dropping anything
/// left of the surface.
fn column(x: i64) -> Option<u16> {
    u16::try_from(x).ok()
}

impl TreeRenderer {
    pub fn new(indent: i32, display_brackets: bool, display_block: bool) -> Result<Self, TreeError> {
        let indent = usize::try_from(indent).map_err(|_| TreeError::InvalidIndent(indent))?;
        Ok(Self {
            indent,
            display_brackets,
            display_block,
            scrollbar: ScrollBar::new(),
        })
    }

    /// Read indent, bracket and block settings from the theme.
    pub fn from_theme(theme: &ThemeDefinition) -> Result<Self, TreeError> {
        Self::new(
            theme.integer(TREE_LEVEL_INDENT, DEFAULT_TREE_LEVEL_INDENT),
            theme.boolean(DISPLAY_BRACKETS, true),
            theme.boolean(DISPLAY_BLOCK, false),
        )
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn display_brackets(&self) -> bool {
        self.display_brackets
    }

    pub fn display_block(&self) -> bool {
        self.display_block
    }

    /// Scrollbar state as of the last draw.
    pub fn scrollbar(&self) -> &ScrollBar {
        &self.scrollbar
    }

    fn offset(&self) -> i64 {
        if self.display_brackets { 0 } else { -1 }
    }

    /// Where the terminal cursor goes: on the selected node's marker.
    pub fn cursor_location<V>(&self, view: &TreeView<V>) -> (u16, u16) {
        let row = view
            .model()
            .depth_to(view.scrolling_node(), view.selected_node())
            .unwrap_or(0);
        let x = 1 + (self.indent * view.selected_level()) as i64 + self.offset();
        (column(x).unwrap_or(0), u16::try_from(row).unwrap_or(u16::MAX))
    }

    /// `(width, height)` needed to show the whole tree without scrolling.
    pub fn preferred_size<V>(&self, view: &TreeView<V>) -> (usize, usize) {
        let model = view.model();
        let root = view.root();
        if model.is_expanded(root) {
            let bracket_size = if self.display_brackets { 4 } else { 2 };
            (
                model.max_expanded_width(root, 0, bracket_size, self.indent),
                model.expanded_length(root),
            )
        } else {
            let label = model.label(root).unwrap_or_default();
            (4 + display_width(label), 1)
        }
    }

    /// Draw the visible window of `view` onto `surface`.
    ///
    /// Returns the scrollbar geometry when the tree overflows its window.
    pub fn draw<V, S: Surface + ?Sized>(
        &mut self,
        view: &TreeView<V>,
        surface: &mut S,
        theme: &ThemeDefinition,
    ) -> Option<ScrollbarGeometry> {
        surface.fill(' ', theme.normal());

        let model = view.model();
        let height = view.window_height();
        let scroll_position = view.selected_depth().saturating_sub(height);

        for (row, node) in model.iter_visible(view.scrolling_node()).take(height).enumerate() {
            let level = model.compute_level(node);
            self.draw_node(view, surface, theme, node, level, row, view.columns() as i64 - 3);
        }

        let displayed = view.compute_tree_depth();
        if displayed <= height {
            return None;
        }
        trace!("{}: {} rows in a window of {}", view.id(), displayed, height);
        self.scrollbar.set_view_size(height);
        self.scrollbar.set_scroll_maximum(displayed);
        self.scrollbar.set_scroll_position(scroll_position);

        let x = u16::try_from(view.columns().saturating_sub(1)).ok()?;
        let area = Rect::new(x, 0, 1, surface.height());
        let mut region = Region::new(&mut *surface, area);
        let origin = region.area();
        self.scrollbar.draw(&mut region, theme).map(|geometry| ScrollbarGeometry {
            x: geometry.x + origin.x,
            y: geometry.y + origin.y,
            ..geometry
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_node<V, S: Surface + ?Sized>(
        &self,
        view: &TreeView<V>,
        surface: &mut S,
        theme: &ThemeDefinition,
        node: NodeId,
        level: usize,
        row: usize,
        label_columns: i64,
    ) {
        let Ok(y) = u16::try_from(row) else {
            return;
        };
        let model = view.model();
        let focused = view.is_focused(node);
        let offset = self.offset();
        let base = (self.indent * level) as i64;

        let label_style = if focused { theme.active() } else { theme.normal() };
        let label_offset = 4 + base + 2 * offset;
        let label = model.label(node).unwrap_or_default();
        if let Some(x) = column(label_offset) {
            if self.display_block {
                let filler = theme.character(DISPLAY_BLOCK_FILLER, '.');
                surface.put_str(x, y, &block_label(label_offset, label, label_columns, filler), label_style);
            } else {
                surface.put_str(x, y, label, label_style);
            }
        }

        let mut gap_style = label_style;
        if self.display_brackets {
            let bracket_style = if focused { theme.prelight() } else { theme.normal() };
            if let Some(x) = column(base) {
                surface.set_char(x, y, theme.character(LEFT_BRACKET, '['), bracket_style);
            }
            if let Some(x) = column(2 + base) {
                surface.set_char(x, y, theme.character(RIGHT_BRACKET, ']'), bracket_style);
            }
            gap_style = bracket_style;
        }
        if let Some(x) = column(3 + base + 2 * offset) {
            surface.set_char(x, y, ' ', gap_style);
        }

        let marker_style = if focused { theme.selected() } else { theme.normal() };
        let marker = if model.is_expanded(node) {
            theme.character(EXPANDED_MARKER, '<')
        } else if model.is_leaf(node) {
            theme.character(LEAF_MARKER, '.')
        } else {
            theme.character(COLLAPSED_MARKER, '>')
        };
        if let Some(x) = column(1 + base + offset) {
            surface.set_char(x, y, marker, marker_style);
        }
    }
}

/// Left-pad `label` with `filler` so it ends at `columns`.
fn block_label(label_offset: i64, label: &str, columns: i64, filler: char) -> String {
    let fill = columns - label_offset - display_width(label) as i64;
    if fill <= 0 {
        return label.to_string();
    }
    let mut padded: String = std::iter::repeat_n(filler, fill as usize).collect();
    padded.push_str(label);
    padded
}
