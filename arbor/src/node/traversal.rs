//! Visible-order navigation.
//!
//! Visible order is a pre-order walk that skips hidden nodes (and their
//! subtrees) and only descends into effectively expanded nodes. Everything
//! here is a plain loop over the arena; no traversal recurses.

use arbor_term::text::display_width;

use super::{NodeId, TreeModel};

impl<V> TreeModel<V> {
    /// First visible child of `id`.
    pub fn first_visible_child(&self, id: NodeId) -> Option<NodeId> {
        self.first_visible_child_from(id, 0)
    }

    fn first_visible_child_from(&self, id: NodeId, start: usize) -> Option<NodeId> {
        self.children(id)
            .iter()
            .skip(start)
            .copied()
            .find(|&c| self.is_visible(c))
    }

    /// Last visible child of `id`.
    pub fn last_visible_child(&self, id: NodeId) -> Option<NodeId> {
        self.last_visible_child_before(id, self.children(id).len())
    }

    fn last_visible_child_before(&self, id: NodeId, end: usize) -> Option<NodeId> {
        let children = self.children(id);
        children[..end.min(children.len())]
            .iter()
            .rev()
            .copied()
            .find(|&c| self.is_visible(c))
    }

    /// Deepest last-visible descendant reachable through expanded nodes.
    ///
    /// Returns `id` itself when it is collapsed or has no visible child.
    pub fn last_expanded_child(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while self.is_expanded(current) {
            match self.last_visible_child(current) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }

    /// Successor of `id` in visible order.
    pub fn next_node(&self, id: NodeId) -> Option<NodeId> {
        if self.is_expanded(id)
            && let Some(child) = self.first_visible_child(id)
        {
            return Some(child);
        }

        let mut current = id;
        while let Some(parent) = self.parent(current) {
            let index = self.child_index(parent, current)?;
            if let Some(sibling) = self.first_visible_child_from(parent, index + 1) {
                return Some(sibling);
            }
            current = parent;
        }
        None
    }

    /// Predecessor of `id` in visible order.
    ///
    /// A hidden parent is stepped over; its own earlier siblings are tried
    /// instead.
    pub fn previous_node(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            let index = self.child_index(parent, current)?;
            if let Some(sibling) = self.last_visible_child_before(parent, index) {
                return Some(self.last_expanded_child(sibling));
            }
            if self.is_visible(parent) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The node `depth` steps after `from` in visible order (`depth == 0`
    /// is `from` itself).
    pub fn node_at_depth(&self, from: NodeId, depth: usize) -> Option<NodeId> {
        if !self.contains(from) {
            return None;
        }
        let mut current = from;
        for _ in 0..depth {
            current = self.next_node(current)?;
        }
        Some(current)
    }

    /// Number of forward steps from `from` to `target`, or `None` if
    /// `target` does not follow `from` in visible order.
    pub fn depth_to(&self, from: NodeId, target: NodeId) -> Option<usize> {
        if !self.contains(from) {
            return None;
        }
        let mut current = from;
        let mut depth = 0;
        while current != target {
            current = self.next_node(current)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Number of visible ancestors of `id`.
    pub fn compute_level(&self, id: NodeId) -> usize {
        self.ancestors(id).filter(|&a| self.is_visible(a)).count()
    }

    /// 1-based position of `id` in visible order, counting back to the first
    /// visible row.
    pub fn compute_depth(&self, id: NodeId) -> usize {
        let mut depth = 1;
        let mut current = self.previous_node(id);
        while let Some(node) = current {
            if !self.is_visible(node) {
                break;
            }
            depth += 1;
            current = self.previous_node(node);
        }
        depth
    }

    /// Rows the subtree of `id` occupies in visible order.
    ///
    /// A hidden `id` contributes no row of its own but its children are
    /// still counted, which matches how a hidden root is drawn.
    pub fn expanded_length(&self, id: NodeId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        let mut rows = usize::from(self.is_visible(id));
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !self.is_expanded(current) {
                continue;
            }
            for &child in self.children(current) {
                if self.is_visible(child) {
                    rows += 1;
                    stack.push(child);
                }
            }
        }
        rows
    }

    /// Widest drawn row in the subtree of `id`.
    ///
    /// Each row costs `bracket_size + indent * level + label width`, where a
    /// node's level grows by one under every visible ancestor.
    pub fn max_expanded_width(
        &self,
        id: NodeId,
        level: usize,
        bracket_size: usize,
        indent: usize,
    ) -> usize {
        if !self.contains(id) {
            return 0;
        }
        let mut widest = 0;
        let mut stack = vec![(id, level)];
        while let Some((current, level)) = stack.pop() {
            let child_level = if self.is_visible(current) {
                let label = self.label(current).unwrap_or_default();
                widest = widest.max(bracket_size + indent * level + display_width(label));
                level + 1
            } else {
                level
            };
            if self.is_expanded(current) {
                for &child in self.children(current) {
                    if self.is_visible(child) {
                        stack.push((child, child_level));
                    }
                }
            }
        }
        widest
    }

    /// Walk visible order starting at (and including) `from`.
    pub fn iter_visible(&self, from: NodeId) -> VisibleIter<'_, V> {
        VisibleIter {
            model: self,
            next: self.contains(from).then_some(from),
        }
    }
}

/// Iterator over nodes in visible order, see [`TreeModel::iter_visible`].
pub struct VisibleIter<'a, V> {
    model: &'a TreeModel<V>,
    next: Option<NodeId>,
}

impl<V> Iterator for VisibleIter<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.model.next_node(current);
        Some(current)
    }
}
