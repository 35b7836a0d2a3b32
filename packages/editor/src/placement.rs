//! # Placement
//!
//! Turns a drop from the canvas into a new editor state.
//!
//! ```text
//! DropEvent ──▶ place(state, event) ──▶ Placement { state, outcome }
//!                   │
//!                   ├─ movingId == targetParentId  → Ignored, nothing changes
//!                   ├─ already a child of target    → Ignored, nothing changes
//!                   ├─ tree rejects the move        → Rejected, nothing changes
//!                   └─ tree accepts the move        → tree updated,
//!                                                     palette item removed
//! ```
//!
//! The tree and palette travel together as one owned [`EditorState`], so a
//! caller never sees the tree updated without the palette pruned.

use canvas_tree::{LayoutTree, MutationError, MutationOutcome, NodeTemplate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::palette::Palette;

/// A node dropped onto a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub moving_id: String,
    pub template: NodeTemplate,
    pub target_parent_id: String,
}

impl DropEvent {
    pub fn new(moving_id: impl Into<String>, template: NodeTemplate, target_parent_id: impl Into<String>) -> Self {
        Self {
            moving_id: moving_id.into(),
            template,
            target_parent_id: target_parent_id.into(),
        }
    }
}

/// Layout document plus the palette it is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub tree: LayoutTree,
    #[serde(default)]
    pub palette: Palette,
    /// Incremented on every accepted drop
    #[serde(default)]
    pub version: u64,
}

impl EditorState {
    pub fn new(tree: LayoutTree, palette: Palette) -> Self {
        Self {
            tree,
            palette,
            version: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementOutcome {
    /// Node was added (new) or relocated (existing)
    Placed(MutationOutcome),
    /// Dropped onto itself, or onto the parent it already has
    Ignored,
    /// The tree refused the move
    Rejected(MutationError),
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }
}

#[derive(Debug, Clone)]
pub struct Placement {
    pub state: EditorState,
    pub outcome: PlacementOutcome,
}

/// Apply one drop
pub fn place(mut state: EditorState, event: &DropEvent) -> Placement {
    let outcome = apply_drop(&mut state, event);
    Placement { state, outcome }
}

/// Apply one drop in place. A drop that is not placed leaves `state`
/// exactly as it was.
pub fn apply_drop(state: &mut EditorState, event: &DropEvent) -> PlacementOutcome {
    if event.moving_id == event.target_parent_id {
        debug!(id = %event.moving_id, "ignoring drop onto itself");
        return PlacementOutcome::Ignored;
    }

    let outcome = match state
        .tree
        .move_node(&event.moving_id, &event.template, &event.target_parent_id)
    {
        Ok(MutationOutcome::Unchanged) => {
            debug!(id = %event.moving_id, "node already under target");
            return PlacementOutcome::Ignored;
        }
        Ok(outcome) => outcome,
        Err(err) => {
            debug!(
                id = %event.moving_id,
                parent = %event.target_parent_id,
                error = %err,
                "drop rejected"
            );
            return PlacementOutcome::Rejected(err);
        }
    };

    state.palette.remove(&event.moving_id);
    state.version += 1;

    info!(
        id = %event.moving_id,
        parent = %event.target_parent_id,
        ?outcome,
        version = state.version,
        "placed node"
    );

    PlacementOutcome::Placed(outcome)
}
