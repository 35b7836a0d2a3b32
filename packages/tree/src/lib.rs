//! # Canvas Tree
//!
//! Layout document model for the Canvas editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ node: nested Node value (JSON form)         │
//! └─────────────────────────────────────────────┘
//!                     ↓ from_node / to_node
//! ┌─────────────────────────────────────────────┐
//! │ tree: LayoutTree, nodes indexed by id       │
//! │  - locate: lookups and depth-first walks    │
//! │  - mutations: move / set content            │
//! └─────────────────────────────────────────────┘
//!                     ↓ consulted while rendering
//! ┌─────────────────────────────────────────────┐
//! │ depth: nesting limit                        │
//! │ slots: free slot accounting                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use canvas_tree::{LayoutTree, NodeKind, NodeTemplate};
//!
//! let root = NodeTemplate::new(NodeKind::Grid).with_grid("2", "2");
//! let mut tree = LayoutTree::new("root", &root);
//!
//! let card = NodeTemplate::new(NodeKind::Content).with_span("1", "1");
//! tree.move_node("card-1", &card, "root").unwrap();
//!
//! assert_eq!(tree.children_of("root").unwrap(), &["card-1".to_string()]);
//! ```

mod errors;
pub mod depth;
pub mod locate;
pub mod mutations;
pub mod node;
pub mod slots;
pub mod tree;

pub use depth::{DepthGuard, MAX_DEPTH};
pub use errors::MutationError;
pub use locate::{descendants, is_descendant, locate, walk, Located, Walk};
pub use mutations::{Mutation, MutationOutcome};
pub use node::{parse_count, LeafContent, Node, NodeKind, NodeTemplate, TitleSection};
pub use slots::{empty_slots, SlotUsage};
pub use tree::{LayoutNode, LayoutTree};
