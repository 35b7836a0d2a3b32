//! # Tree Mutations
//!
//! Structural and attribute changes to a [`LayoutTree`].
//!
//! ## Move
//!
//! Relocates a node, with its whole subtree, to the end of a new parent's
//! children. The node may be new to the tree (dragged in from the palette).
//!
//! 1. **Validate**: the target parent must exist and accept children; the
//!    move must not target the node itself, the root, or anything inside
//!    the moved subtree.
//! 2. **Detach**: drop the node id from its current parent. Its own
//!    children stay attached to it.
//! 3. **Attach**: take declared attributes from the template and append
//!    the node to the new parent.
//!
//! Validation runs before anything is touched, so a rejected move leaves
//! the tree exactly as it was. Dropping a node onto the parent it already
//! has changes nothing, which makes repeated moves idempotent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locate::is_descendant;
use crate::node::{LeafContent, NodeTemplate};
use crate::tree::{LayoutNode, LayoutTree};
use crate::MutationError;

/// Changes the editor can make to a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Move (or insert) a node under a new parent
    Move {
        node_id: String,
        template: NodeTemplate,
        new_parent_id: String,
    },

    /// Replace the editorial attributes of a content leaf
    SetContent {
        node_id: String,
        content: LeafContent,
    },
}

/// What an applied mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Node was not in the tree before
    Inserted,
    /// Existing node changed parent
    Moved,
    /// Node was already a child of the target parent
    Unchanged,
    ContentUpdated,
}

impl Mutation {
    /// Apply mutation to the tree with validation
    pub fn apply(&self, tree: &mut LayoutTree) -> Result<MutationOutcome, MutationError> {
        self.validate(tree)?;

        match self {
            Mutation::Move { node_id, template, new_parent_id } => {
                Ok(Self::apply_move(tree, node_id, template, new_parent_id))
            }

            Mutation::SetContent { node_id, content } => {
                tree.set_content(node_id, content.clone())?;
                Ok(MutationOutcome::ContentUpdated)
            }
        }
    }

    fn apply_move(
        tree: &mut LayoutTree,
        node_id: &str,
        template: &NodeTemplate,
        new_parent_id: &str,
    ) -> MutationOutcome {
        if tree.parent_of(node_id) == Some(new_parent_id) {
            return MutationOutcome::Unchanged;
        }

        let outcome = match tree.parent_of(node_id).map(str::to_string) {
            Some(old_parent) => {
                if let Some(parent) = tree.get_mut(&old_parent) {
                    parent.children.retain(|child| child != node_id);
                }
                if let Some(node) = tree.get_mut(node_id) {
                    node.redecorate(template);
                    node.parent = Some(new_parent_id.to_string());
                }
                MutationOutcome::Moved
            }
            None => {
                tree.insert(LayoutNode::from_template(
                    node_id,
                    template,
                    Some(new_parent_id.to_string()),
                ));
                MutationOutcome::Inserted
            }
        };

        if let Some(parent) = tree.get_mut(new_parent_id) {
            parent.children.push(node_id.to_string());
        }

        debug!(node_id, new_parent_id, ?outcome, "moved node");
        outcome
    }

    /// Validate without applying
    pub fn validate(&self, tree: &LayoutTree) -> Result<(), MutationError> {
        match self {
            Mutation::Move { node_id, new_parent_id, .. } => {
                if node_id == new_parent_id {
                    return Err(MutationError::SelfMove(node_id.clone()));
                }

                if node_id == tree.root_id() {
                    return Err(MutationError::RootImmovable);
                }

                let parent = tree
                    .get(new_parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.clone()))?;

                // The root accepts drops whatever its declared type
                if !parent.is_container() && parent.id != tree.root_id() {
                    return Err(MutationError::NotAContainer(new_parent_id.clone()));
                }

                if tree.contains(node_id) && is_descendant(tree, node_id, new_parent_id) {
                    return Err(MutationError::CycleDetected {
                        node: node_id.clone(),
                        parent: new_parent_id.clone(),
                    });
                }

                Ok(())
            }

            Mutation::SetContent { node_id, .. } => {
                tree.get(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }
        }
    }
}

impl LayoutTree {
    /// Move `node_id` under `new_parent_id`, taking declared attributes
    /// from `template` and keeping the node's existing children.
    pub fn move_node(
        &mut self,
        node_id: &str,
        template: &NodeTemplate,
        new_parent_id: &str,
    ) -> Result<MutationOutcome, MutationError> {
        Mutation::Move {
            node_id: node_id.to_string(),
            template: template.clone(),
            new_parent_id: new_parent_id.to_string(),
        }
        .apply(self)
    }
}
