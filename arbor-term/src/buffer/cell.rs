use crate::types::{Rgb, Style, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    /// A cell showing `char` painted with a resolved style.
    pub fn styled(char: char, style: Style) -> Self {
        Self {
            char,
            fg: style.fg,
            bg: style.bg,
            style: style.text_style,
            wide_continuation: false,
        }
    }

    /// The trailing half of a double-width character.
    pub fn continuation(style: Style) -> Self {
        Self {
            wide_continuation: true,
            ..Self::styled(' ', style)
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// The style this cell was painted with.
    pub fn cell_style(&self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            text_style: self.style,
        }
    }
}
