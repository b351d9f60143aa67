//! Deferred listener notifications.
//!
//! A tree view holding a [`DispatchSender`] does not call its listeners
//! while it is still inside an input handler. It queues a [`Notice`]
//! instead, and whoever owns the view hands it back through
//! [`TreeView::deliver`](crate::widgets::tree::TreeView::deliver) once the
//! handler has returned.

use tokio::sync::mpsc;

use crate::node::NodeId;
use crate::widgets::tree::TreeId;

/// A notification waiting to be delivered to a tree's listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The expansion flag of `node` in tree `tree` was toggled.
    ToggleChanged { tree: TreeId, node: NodeId },
}

impl Notice {
    /// The tree this notice belongs to.
    pub fn tree(&self) -> TreeId {
        match *self {
            Notice::ToggleChanged { tree, .. } => tree,
        }
    }
}

/// Sender half of the dispatch channel.
#[derive(Clone, Debug)]
pub struct DispatchSender {
    tx: mpsc::UnboundedSender<Notice>,
}

impl DispatchSender {
    /// Queue a notice. Hands it back if the receiver is gone.
    pub fn send(&self, notice: Notice) -> Result<(), Notice> {
        self.tx.send(notice).map_err(|e| e.0)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiver half of the dispatch channel.
#[derive(Debug)]
pub struct DispatchReceiver {
    rx: mpsc::UnboundedReceiver<Notice>,
}

impl DispatchReceiver {
    /// Wait for the next notice.
    pub async fn recv(&mut self) -> Option<Notice> {
        self.rx.recv().await
    }

    /// Take a notice if one is already queued.
    pub fn try_recv(&mut self) -> Option<Notice> {
        self.rx.try_recv().ok()
    }

    /// Take every queued notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(notice) = self.rx.try_recv() {
            notices.push(notice);
        }
        notices
    }
}

/// Create a new dispatch channel pair.
pub fn channel() -> (DispatchSender, DispatchReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DispatchSender { tx }, DispatchReceiver { rx })
}
