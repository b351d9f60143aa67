//! Tree widget for displaying a [`TreeModel`](crate::node::TreeModel).
//!
//! [`TreeView`] holds selection and scroll state and reacts to input through
//! [`Interactable`](crate::widgets::events::Interactable). [`TreeRenderer`]
//! draws it onto any `arbor_term` surface.
//!
//! # Example
//!
//! ```ignore
//! use arbor::prelude::*;
//!
//! let mut model = TreeModel::new();
//! let root = model.insert("root")?;
//! model.add_child_value(root, "child", true)?;
//!
//! let mut view = TreeView::new(model, root, 35, 15)?;
//! view.handle_key(KeyEvent::plain(Key::Down));
//!
//! let mut renderer = TreeRenderer::from_theme(&theme)?;
//! renderer.draw(&view, &mut buffer, &theme);
//! ```

mod events;
mod listener;
mod render;
mod state;

pub use listener::{ListenerId, TreeListener};
pub use render::{
    COLLAPSED_MARKER, DEFAULT_TREE_LEVEL_INDENT, DISPLAY_BLOCK, DISPLAY_BLOCK_FILLER,
    DISPLAY_BRACKETS, EXPANDED_MARKER, LEAF_MARKER, LEFT_BRACKET, RIGHT_BRACKET,
    TREE_LEVEL_INDENT, TreeRenderer,
};
pub use state::{TreeId, TreeView};
