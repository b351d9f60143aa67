pub mod buffer;
pub mod event;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;

pub use buffer::{Buffer, Cell, Region, Surface};
pub use event::{
    Event, Key, KeyEvent, Modifiers, MouseAction, MouseActionKind, MouseButton, convert_event,
};
pub use rect::Rect;
pub use terminal::Terminal;
pub use theme::{ThemeDefinition, ThemeOverrides};
pub use types::*;
