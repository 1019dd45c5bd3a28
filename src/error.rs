//! Errors.

use thiserror::Error;

use crate::NodeId;

/// Structure inconsistency error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    /// Attempt to make a node the ancestor of itself.
    #[error("attempt to make a node the ancestor of itself")]
    AncestorDescendantLoop,
    /// Attempt to make a node the sibling of itself.
    #[error("attempt to make a node the sibling of itself")]
    UnorderableSiblings,
}

/// Error while rebuilding a forest from a flat list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RebuildError {
    /// An entry refers to a parent that is not in the list.
    #[error("entry `{id}` refers to missing parent `{parent}`")]
    DanglingParent {
        /// Entry with the dangling reference.
        id: NodeId,
        /// Referenced parent.
        parent: NodeId,
    },
    /// An entry is not reachable from any root, i.e. its ancestors form a loop.
    #[error("entry `{id}` is not reachable from any root")]
    Unreachable {
        /// First unreachable entry in list order.
        id: NodeId,
    },
}
