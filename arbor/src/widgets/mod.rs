//! Widgets.

pub mod events;
pub mod scrollbar;
pub mod tree;

pub use events::{EventResult, FocusMove, Interactable};
pub use scrollbar::ScrollBar;
pub use tree::{TreeRenderer, TreeView};
