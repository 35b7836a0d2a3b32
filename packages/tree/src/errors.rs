//! Error types for tree mutations

use thiserror::Error;

/// Why a structural change was rejected.
///
/// A rejected change never touches the tree, so callers may treat any of
/// these as a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Node cannot have children: {0}")]
    NotAContainer(String),

    #[error("Node is not a content leaf: {0}")]
    NotContent(String),

    #[error("Cannot move node onto itself: {0}")]
    SelfMove(String),

    #[error("Would create cycle: {parent} is inside {node}")]
    CycleDetected { node: String, parent: String },

    #[error("Root node cannot be moved")]
    RootImmovable,

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}
