//! A scrollable tree widget for `arbor_term` surfaces.
//!
//! [`node::TreeModel`] holds the hierarchy, [`widgets::tree::TreeView`] the
//! selection and scroll state, and [`widgets::tree::TreeRenderer`] draws it.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod node;
pub mod widgets;

pub use config::{ConfigError, TreeConfig};
pub use error::TreeError;

pub mod prelude {
    pub use crate::config::{ConfigError, TreeConfig};
    pub use crate::dispatch::{DispatchReceiver, DispatchSender, Notice};
    pub use crate::error::TreeError;
    pub use crate::node::{NodeId, TreeModel};
    pub use crate::widgets::events::{EventResult, FocusMove, Interactable};
    pub use crate::widgets::scrollbar::ScrollBar;
    pub use crate::widgets::tree::{ListenerId, TreeId, TreeListener, TreeRenderer, TreeView};

    pub use arbor_term::{Event, Key, KeyEvent, Modifiers, MouseAction, MouseActionKind, MouseButton};
    pub use arbor_term::{Surface, ThemeDefinition};
}
