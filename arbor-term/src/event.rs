//! Decoded input events.
//!
//! Raw crossterm events are translated once, at the edge, into the small
//! vocabulary widgets understand. Anything a widget can't act on is dropped
//! by [`convert_event`].

use log::trace;

use crate::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseAction),
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
}

/// A key press together with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press with no modifiers held.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::new())
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseActionKind {
    ClickDown(MouseButton),
    ClickRelease(MouseButton),
    Drag(MouseButton),
    Move,
    ScrollUp,
    ScrollDown,
}

/// A mouse action at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseAction {
    pub kind: MouseActionKind,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseAction {
    pub fn new(kind: MouseActionKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::new(),
        }
    }

    /// Re-express this action relative to `area`'s top-left corner, or
    /// `None` if it happened outside `area`.
    pub fn relative_to(&self, area: Rect) -> Option<MouseAction> {
        if !area.contains(self.x, self.y) {
            return None;
        }
        Some(MouseAction {
            x: self.x - area.x,
            y: self.y - area.y,
            ..*self
        })
    }
}

/// Translate a crossterm event, dropping the ones with no counterpart.
pub fn convert_event(event: crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    let converted = match event {
        CtEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let code = Key::try_from(key.code).ok()?;
            Some(Event::Key(KeyEvent::new(code, key.modifiers.into())))
        }
        CtEvent::Mouse(mouse) => {
            let kind = match mouse.kind {
                MouseEventKind::Down(btn) => MouseActionKind::ClickDown(btn.into()),
                MouseEventKind::Up(btn) => MouseActionKind::ClickRelease(btn.into()),
                MouseEventKind::Drag(btn) => MouseActionKind::Drag(btn.into()),
                MouseEventKind::Moved => MouseActionKind::Move,
                MouseEventKind::ScrollUp => MouseActionKind::ScrollUp,
                MouseEventKind::ScrollDown => MouseActionKind::ScrollDown,
                _ => return None,
            };
            Some(Event::Mouse(MouseAction {
                kind,
                x: mouse.column,
                y: mouse.row,
                modifiers: mouse.modifiers.into(),
            }))
        }
        CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        CtEvent::FocusGained => Some(Event::FocusGained),
        CtEvent::FocusLost => Some(Event::FocusLost),
        _ => None,
    };
    trace!("Converted input event: {:?}", converted);
    converted
}

/// Error for key codes with no [`Key`] counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedKey;

impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = UnsupportedKey;

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => return Err(UnsupportedKey),
        };
        Ok(key)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
