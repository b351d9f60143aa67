//! Event handling for the tree view.

use arbor_term::{Key, KeyEvent, MouseAction, MouseActionKind};
use log::trace;

use crate::widgets::events::{EventResult, FocusMove, Interactable};

use super::state::TreeView;

/// Enter or Space with no modifiers held.
fn is_activation(key: &KeyEvent) -> bool {
    matches!(key.key, Key::Enter | Key::Char(' ')) && key.modifiers.none()
}

impl<V> Interactable for TreeView<V> {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if is_activation(&key) {
            self.activate();
            return EventResult::Consumed;
        }
        if !key.modifiers.none() {
            return EventResult::Ignored;
        }

        trace!("{}: key {:?}", self.id(), key.key);
        match key.key {
            Key::Down => self.select_next(),
            Key::Up => self.select_previous(),
            Key::Home => self.select_first_node(),
            Key::End => self.select_last_node(),
            Key::PageDown => self.page_down(),
            Key::PageUp => self.page_up(),
            Key::Tab => return EventResult::MoveFocus(FocusMove::Next),
            Key::BackTab => return EventResult::MoveFocus(FocusMove::Previous),
            Key::Right => return EventResult::MoveFocus(FocusMove::Right),
            Key::Left => return EventResult::MoveFocus(FocusMove::Left),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_mouse(&mut self, action: MouseAction) -> EventResult {
        match action.kind {
            MouseActionKind::ScrollUp => self.select_previous(),
            MouseActionKind::ScrollDown => self.select_next(),
            MouseActionKind::ClickDown(_) => self.click_row(action.y as usize),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}
