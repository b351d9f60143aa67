//! Toggle listeners.

use crate::node::{NodeId, TreeModel};

/// Observer told whenever activation toggles a node's expansion.
pub trait TreeListener<V> {
    fn on_toggle_changed(&mut self, model: &TreeModel<V>, node: NodeId);
}

impl<V, F> TreeListener<V> for F
where
    F: FnMut(&TreeModel<V>, NodeId),
{
    fn on_toggle_changed(&mut self, model: &TreeModel<V>, node: NodeId) {
        self(model, node)
    }
}

/// Handle returned by [`TreeView::add_listener`](super::TreeView::add_listener).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(super) usize);
