use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Whether `s` contains a line break (`\n` or `\r`).
pub fn is_multiline(s: &str) -> bool {
    s.contains(['\n', '\r'])
}
