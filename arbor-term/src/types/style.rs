use super::{Color, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            reverse: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// A resolved cell style: concrete colors plus text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub text_style: TextStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            text_style: TextStyle::new(),
        }
    }
}

impl Style {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg: fg.to_rgb(),
            bg: bg.to_rgb(),
            text_style: TextStyle::new(),
        }
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }
}
