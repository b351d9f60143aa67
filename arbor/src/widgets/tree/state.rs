//! Tree widget state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace, warn};

use crate::dispatch::{DispatchSender, Notice};
use crate::error::TreeError;
use crate::node::{NodeId, TreeModel};

use super::listener::{ListenerId, TreeListener};

/// Unique identifier for a tree view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__tree_{}", self.0)
    }
}

type SelectCallback<V> = Box<dyn FnMut(&TreeModel<V>, NodeId)>;

/// A scrollable, keyboard and mouse driven view over a [`TreeModel`].
///
/// The view owns its model. It tracks a selected node, which is the only
/// focused node, and a scrolling anchor: the node drawn on the first row.
/// After every navigation the selection sits less than `window_height`
/// rows below the anchor in visible order.
///
/// Expanding or collapsing never moves the selection. Changing the model
/// through [`TreeView::update`] re-checks both selection and anchor.
pub struct TreeView<V> {
    id: TreeId,
    model: TreeModel<V>,
    root: NodeId,
    selected: NodeId,
    scrolling: NodeId,
    /// Visible ancestors of the selection.
    selected_level: usize,
    /// 1-based visible-order row of the selection.
    selected_depth: usize,
    columns: usize,
    window_height: usize,
    overflow_circle: bool,
    on_select: Option<SelectCallback<V>>,
    listeners: Vec<(ListenerId, Box<dyn TreeListener<V>>)>,
    next_listener: usize,
    dispatcher: Option<DispatchSender>,
    dirty: bool,
}

impl<V> fmt::Debug for TreeView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("id", &self.id)
            .field("root", &self.root)
            .field("selected", &self.selected)
            .field("scrolling", &self.scrolling)
            .field("columns", &self.columns)
            .field("window_height", &self.window_height)
            .field("overflow_circle", &self.overflow_circle)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<V> TreeView<V> {
    /// Create a view over `model` rooted at `root`.
    ///
    /// The root is selected and anchored. It must belong to the model and
    /// must not have a parent.
    pub fn new(
        model: TreeModel<V>,
        root: NodeId,
        columns: usize,
        window_height: usize,
    ) -> Result<Self, TreeError> {
        if !model.contains(root) {
            return Err(TreeError::UnknownNode(root));
        }
        if model.parent(root).is_some() {
            return Err(TreeError::RootHasParent(root));
        }
        if columns == 0 || window_height == 0 {
            return Err(TreeError::InvalidDimensions {
                columns,
                height: window_height,
            });
        }

        let mut view = Self {
            id: TreeId::new(),
            model,
            root,
            selected: root,
            scrolling: root,
            selected_level: 0,
            selected_depth: 1,
            columns,
            window_height,
            overflow_circle: false,
            on_select: None,
            listeners: Vec::new(),
            next_listener: 0,
            dispatcher: None,
            dirty: true,
        };
        view.recompute_cursor_position();
        debug!("{}: created with {} nodes", view.id, view.model.len());
        Ok(view)
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn model(&self) -> &TreeModel<V> {
        &self.model
    }

    /// Direct access to the model. Call [`revalidate`](Self::revalidate)
    /// after changing structure, expansion or visibility.
    pub fn model_mut(&mut self) -> &mut TreeModel<V> {
        self.dirty = true;
        &mut self.model
    }

    /// Mutate the model, then re-check selection and anchor.
    ///
    /// A selection that is no longer reachable moves to its nearest
    /// reachable ancestor, or to the first node.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut TreeModel<V>) -> R) -> R {
        let result = f(&mut self.model);
        self.revalidate();
        result
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn selected_node(&self) -> NodeId {
        self.selected
    }

    pub fn scrolling_node(&self) -> NodeId {
        self.scrolling
    }

    /// Only the selected node is focused.
    pub fn is_focused(&self, node: NodeId) -> bool {
        node == self.selected
    }

    pub fn selected_level(&self) -> usize {
        self.selected_level
    }

    pub fn selected_depth(&self) -> usize {
        self.selected_depth
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    /// `(columns, window_height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.columns, self.window_height)
    }

    pub fn is_overflow_circle(&self) -> bool {
        self.overflow_circle
    }

    /// Let Up/Down wrap around the ends of the tree.
    pub fn set_overflow_circle(&mut self, overflow_circle: bool) {
        self.overflow_circle = overflow_circle;
    }

    pub fn is_display_root(&self) -> bool {
        self.model.is_visible(self.root)
    }

    /// Show or hide the root row.
    ///
    /// Hiding it moves selection and anchor to its first visible child.
    pub fn set_display_root(&mut self, display: bool) {
        if self.model.set_visible(self.root, display).is_err() {
            return;
        }
        if !display && let Some(first) = self.model.first_visible_child(self.root) {
            self.selected = first;
            self.scrolling = first;
        }
        self.recompute_cursor_position();
        self.dirty = true;
    }

    /// Total rows of the tree in visible order.
    pub fn compute_tree_depth(&self) -> usize {
        if !self.model.is_expanded(self.root) {
            return 1;
        }
        match self.model.last_visible_child(self.root) {
            Some(last) => self
                .model
                .compute_depth(self.model.last_expanded_child(last)),
            None => 1,
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the view changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// The first row: the root when shown, else its first visible child.
    pub fn first_node(&self) -> Option<NodeId> {
        if self.model.is_visible(self.root) {
            Some(self.root)
        } else {
            self.model.first_visible_child(self.root)
        }
    }

    /// The last row in visible order.
    ///
    /// A hidden root with nothing drawn below it falls back to the first row.
    pub fn last_node(&self) -> NodeId {
        let last = self.model.last_expanded_child(self.root);
        if self.model.is_visible(last) {
            last
        } else {
            self.first_node().unwrap_or(last)
        }
    }

    /// Select and anchor the first row. No-op when there is none.
    pub fn select_first_node(&mut self) {
        if let Some(first) = self.first_node() {
            self.set_selected(first);
            self.scrolling = first;
        }
    }

    /// Select the last row and scroll it into view.
    pub fn select_last_node(&mut self) {
        let last = self.last_node();
        self.set_selected(last);
        self.update_scrolling_node();
    }

    /// Move one row down, wrapping to the top if overflow is on.
    pub fn select_next(&mut self) {
        self.step_next(self.overflow_circle);
    }

    /// Move one row up, wrapping to the bottom if overflow is on.
    pub fn select_previous(&mut self) {
        self.step_previous(self.overflow_circle);
    }

    /// Move down a window's worth of rows and anchor at the selection.
    ///
    /// Hitting the end stops the page; with overflow on it first wraps to
    /// the top.
    pub fn page_down(&mut self) {
        for _ in 0..self.window_height {
            if !self.step_next(self.overflow_circle) {
                break;
            }
        }
        self.scrolling = self.selected;
        self.dirty = true;
    }

    /// Move up a window's worth of rows and anchor at the selection.
    ///
    /// Hitting the start stops the page; with overflow on it first wraps to
    /// the bottom.
    pub fn page_up(&mut self) {
        for _ in 0..self.window_height {
            if !self.step_previous(self.overflow_circle) {
                break;
            }
        }
        self.scrolling = self.selected;
        self.dirty = true;
    }

    /// Returns true if the selection moved to the successor.
    fn step_next(&mut self, wrap: bool) -> bool {
        match self.model.next_node(self.selected) {
            Some(next) => {
                self.set_selected(next);
                self.update_scrolling_node();
                true
            }
            None => {
                if wrap {
                    trace!("{}: wrapping to first node", self.id);
                    self.select_first_node();
                }
                false
            }
        }
    }

    /// Returns true if the selection moved to the predecessor.
    fn step_previous(&mut self, wrap: bool) -> bool {
        match self.model.previous_node(self.selected) {
            Some(previous) => {
                self.set_selected(previous);
                self.update_scrolling_node();
                true
            }
            None => {
                if wrap {
                    trace!("{}: wrapping to last node", self.id);
                    self.select_last_node();
                }
                false
            }
        }
    }

    /// Mouse click on row `row` of the window: toggle and select the node
    /// drawn there. Rows without a node are ignored.
    pub fn click_row(&mut self, row: usize) {
        if row >= self.window_height {
            return;
        }
        let Some(node) = self.model.node_at_depth(self.scrolling, row) else {
            return;
        };
        if self.model.toggle_expanded(node).is_ok() {
            trace!("{}: clicked {} on row {}", self.id, node, row);
            self.set_selected(node);
        }
    }

    fn set_selected(&mut self, node: NodeId) {
        self.selected = node;
        self.recompute_cursor_position();
        self.dirty = true;
    }

    fn recompute_cursor_position(&mut self) {
        self.selected_level = self.model.compute_level(self.selected);
        self.selected_depth = self.model.compute_depth(self.selected);
    }

    /// Pull the anchor along so the selection stays inside the window.
    fn update_scrolling_node(&mut self) {
        if self.model.previous_node(self.scrolling) == Some(self.selected) {
            self.scrolling = self.selected;
            return;
        }
        match self.model.depth_to(self.scrolling, self.selected) {
            Some(mut distance) => {
                while distance >= self.window_height {
                    match self.model.next_node(self.scrolling) {
                        Some(next) => self.scrolling = next,
                        None => break,
                    }
                    distance -= 1;
                }
            }
            None => {
                warn!(
                    "{}: selection {} is not below anchor {}; re-anchoring",
                    self.id, self.selected, self.scrolling
                );
                self.scrolling = self.selected;
            }
        }
    }

    /// Re-establish selection and anchor after the model changed.
    ///
    /// The root never has a parent; if it was attached somewhere it is
    /// detached again.
    pub fn revalidate(&mut self) {
        if let Some(parent) = self.model.parent(self.root) {
            warn!(
                "{}: root {} was attached under {}; detaching",
                self.id, self.root, parent
            );
            self.model.remove_child(parent, self.root);
        }
        if !self.is_reachable(self.selected) {
            let fallback = self
                .model
                .ancestors(self.selected)
                .find(|&a| self.is_reachable(a))
                .or_else(|| self.first_node())
                .unwrap_or(self.root);
            debug!(
                "{}: selection {} unreachable, moving to {}",
                self.id, self.selected, fallback
            );
            self.selected = fallback;
        }
        if !self.is_reachable(self.scrolling)
            || self.model.depth_to(self.scrolling, self.selected).is_none()
        {
            self.scrolling = self.selected;
        } else {
            self.update_scrolling_node();
        }
        self.recompute_cursor_position();
        self.dirty = true;
    }

    /// True if `node` is drawn somewhere in the tree's visible order.
    fn is_reachable(&self, node: NodeId) -> bool {
        if node == self.root {
            return self.model.is_visible(node);
        }
        if !self.model.is_visible(node) {
            return false;
        }
        for ancestor in self.model.ancestors(node) {
            if !self.model.is_expanded(ancestor) {
                return false;
            }
            if ancestor == self.root {
                return true;
            }
            if !self.model.is_visible(ancestor) {
                return false;
            }
        }
        false
    }

    // -------------------------------------------------------------------------
    // Activation and listeners
    // -------------------------------------------------------------------------

    /// Toggle the selected node, run the selection callback, then notify
    /// listeners.
    pub fn activate(&mut self) {
        let node = self.selected;
        match self.model.toggle_expanded(node) {
            Ok(expanded) => debug!("{}: {} expanded={}", self.id, node, expanded),
            Err(err) => {
                warn!("{}: cannot activate: {}", self.id, err);
                return;
            }
        }
        self.dirty = true;

        if let Some(callback) = self.on_select.as_mut() {
            callback(&self.model, node);
        }
        self.notify_toggle_changed(node);
    }

    /// Replace the callback run on activation.
    pub fn set_on_select(&mut self, callback: impl FnMut(&TreeModel<V>, NodeId) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    pub fn clear_on_select(&mut self) {
        self.on_select = None;
    }

    pub fn add_listener(&mut self, listener: impl TreeListener<V> + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if no listener had that id.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Queue listener notifications on `sender` instead of running them
    /// inside the input handler.
    pub fn install_dispatcher(&mut self, sender: DispatchSender) {
        self.dispatcher = Some(sender);
    }

    /// Run the listeners for a queued notice. Returns false if the notice
    /// belongs to another tree or names an unknown node.
    pub fn deliver(&mut self, notice: Notice) -> bool {
        match notice {
            Notice::ToggleChanged { tree, node } if tree == self.id && self.model.contains(node) => {
                self.run_listeners(node);
                true
            }
            _ => false,
        }
    }

    fn notify_toggle_changed(&mut self, node: NodeId) {
        if self.listeners.is_empty() {
            return;
        }
        let notice = Notice::ToggleChanged {
            tree: self.id,
            node,
        };
        match self.dispatcher.as_ref().map(|d| d.send(notice)) {
            Some(Ok(())) => return,
            Some(Err(_)) => {
                debug!("{}: dispatcher closed, notifying inline", self.id);
                self.dispatcher = None;
            }
            None => {}
        }
        self.run_listeners(node);
    }

    fn run_listeners(&mut self, node: NodeId) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_toggle_changed(&self.model, node);
        }
    }
}
