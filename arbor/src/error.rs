use thiserror::Error;

use crate::node::NodeId;

/// Errors raised when building or mutating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("multiline tree node labels are not supported")]
    MultilineLabel,
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),
    #[error("cannot attach node {child} beneath itself or its descendant {parent}")]
    Cycle { parent: NodeId, child: NodeId },
    #[error("root node {0} is attached to a parent")]
    RootHasParent(NodeId),
    #[error("tree view needs positive dimensions, got {columns}x{height}")]
    InvalidDimensions { columns: usize, height: usize },
    #[error("indent must be >= 0, got {0}")]
    InvalidIndent(i32),
}
