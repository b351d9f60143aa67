//! Widget event handling types and traits.
//!
//! Widgets receive already-decoded input from `arbor_term` and report back
//! whether they used it. Focus traversal is left to the owner: a widget
//! asks for it through [`EventResult::MoveFocus`].

use arbor_term::{Event, KeyEvent, MouseAction};

// =============================================================================
// Event Result
// =============================================================================

/// Direction of a requested focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
    Left,
    Right,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// The widget wants focus to move to a neighbour.
    MoveFocus(FocusMove),
}

impl EventResult {
    /// Check if the event was handled (consumed or turned into a focus move).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// =============================================================================
// Interactable
// =============================================================================

/// A widget that reacts to keyboard and mouse input.
pub trait Interactable {
    fn handle_key(&mut self, key: KeyEvent) -> EventResult;

    /// Handle a mouse action. Coordinates are relative to the widget.
    fn handle_mouse(&mut self, action: MouseAction) -> EventResult;

    fn handle_event(&mut self, event: &Event) -> EventResult {
        match *event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(action) => self.handle_mouse(action),
            _ => EventResult::Ignored,
        }
    }
}
