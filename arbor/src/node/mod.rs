//! Hierarchical node model.
//!
//! A [`TreeModel`] is an arena of nodes addressed by [`NodeId`]. Every node
//! carries a value, a single-line label, an expansion intent flag and a
//! visibility flag. Parent links and child lists are only ever changed
//! together, by [`TreeModel::add_child`] and [`TreeModel::remove_child`].
//!
//! Nodes start out standalone. Attaching builds the tree; detaching leaves
//! the subtree in the arena where it can be attached again.

mod traversal;

use std::fmt;

use arbor_term::text::is_multiline;

use crate::error::TreeError;

pub use traversal::VisibleIter;

/// Handle to a node inside a [`TreeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData<V> {
    value: V,
    label: String,
    expanded: bool,
    visible: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An ordered, rooted multiway tree (or forest, while nodes are detached).
#[derive(Debug, Clone)]
pub struct TreeModel<V> {
    nodes: Vec<NodeData<V>>,
}

impl<V> Default for TreeModel<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_label(label: &str) -> Result<(), TreeError> {
    if is_multiline(label) {
        Err(TreeError::MultilineLabel)
    } else {
        Ok(())
    }
}

impl<V> TreeModel<V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Option<&NodeData<V>> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData<V>, TreeError> {
        self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode(id))
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Create a standalone node with an explicit label.
    pub fn insert_labeled(
        &mut self,
        value: V,
        label: impl Into<String>,
        expanded: bool,
    ) -> Result<NodeId, TreeError> {
        let label = label.into();
        validate_label(&label)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            value,
            label,
            expanded,
            visible: true,
            parent: None,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved. Attaching a node beneath
    /// itself or one of its own descendants is rejected.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::UnknownNode(child));
        }
        if parent == child || self.is_ancestor_of(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }

        if let Some(previous) = self.parent(child) {
            self.remove_child(previous, child);
        }
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(child)
    }

    /// Create a node and attach it to `parent` in one step.
    pub fn add_child_labeled(
        &mut self,
        parent: NodeId,
        value: V,
        label: impl Into<String>,
        expanded: bool,
    ) -> Result<NodeId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        let child = self.insert_labeled(value, label, expanded)?;
        self.add_child(parent, child)
    }

    /// Detach `child` from `parent`. Returns false if it wasn't attached there.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(index) = self.child_index(parent, child) else {
            return false;
        };
        self.nodes[parent.0].children.remove(index);
        self.nodes[child.0].parent = None;
        true
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.node(id).map(|n| &n.value)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), TreeError> {
        let label = label.into();
        validate_label(&label)?;
        self.node_mut(id)?.label = label;
        Ok(())
    }

    /// Children of `id` in insertion order (empty for unknown ids).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    /// The raw expansion intent, regardless of children.
    pub fn expanded_flag(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.expanded)
    }

    /// Effective expansion: the flag is set and there is at least one child.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|n| n.expanded && !n.children.is_empty())
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> Result<(), TreeError> {
        self.node_mut(id)?.expanded = expanded;
        Ok(())
    }

    /// Flip the expansion flag, returning its new value.
    pub fn toggle_expanded(&mut self, id: NodeId) -> Result<bool, TreeError> {
        let node = self.node_mut(id)?;
        node.expanded = !node.expanded;
        Ok(node.expanded)
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.visible)
    }

    /// Hide or show a node. A hidden node takes its whole subtree with it.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), TreeError> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    /// Iterate over the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, V> {
        Ancestors {
            model: self,
            next: self.parent(id),
        }
    }

    /// True if `ancestor` lies on the parent chain of `id`.
    pub fn is_ancestor_of(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    pub(crate) fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }
}

impl<V: fmt::Display> TreeModel<V> {
    /// Create a standalone, expanded node labeled with the value's `Display`.
    pub fn insert(&mut self, value: V) -> Result<NodeId, TreeError> {
        self.insert_with(value, true)
    }

    pub fn insert_with(&mut self, value: V, expanded: bool) -> Result<NodeId, TreeError> {
        let label = value.to_string();
        self.insert_labeled(value, label, expanded)
    }

    /// Create a node from a value and attach it to `parent`.
    pub fn add_child_value(
        &mut self,
        parent: NodeId,
        value: V,
        expanded: bool,
    ) -> Result<NodeId, TreeError> {
        let label = value.to_string();
        self.add_child_labeled(parent, value, label, expanded)
    }
}

/// Iterator over a node's ancestors, see [`TreeModel::ancestors`].
pub struct Ancestors<'a, V> {
    model: &'a TreeModel<V>,
    next: Option<NodeId>,
}

impl<V> Iterator for Ancestors<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.model.parent(current);
        Some(current)
    }
}
