//! # Canvas Editor
//!
//! Editing engine around a [`canvas_tree::LayoutTree`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ canvas: drag source + drop target           │
//! └─────────────────────────────────────────────┘
//!                     ↓ DropEvent
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorState (tree + palette)        │
//! │  - Place drops, prune the palette           │
//! │  - Render with depth limit and slot counts  │
//! │  - Debounced properties commits             │
//! │  - Media upload                             │
//! └─────────────────────────────────────────────┘
//!                     ↓ Mutation
//! ┌─────────────────────────────────────────────┐
//! │ tree: arena LayoutTree, move algorithm      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use canvas_editor::{place, DropEvent, EditorState, IdGenerator, Palette, PlacementOutcome};
//! use canvas_tree::{LayoutTree, NodeKind, NodeTemplate};
//!
//! let tree = LayoutTree::new("root", &NodeTemplate::new(NodeKind::Grid).with_grid("2", "2"));
//! let mut ids = IdGenerator::new("home.json");
//! let state = EditorState::new(tree, Palette::standard(&mut ids));
//!
//! let item = state.palette.iter().next().unwrap().clone();
//! let placed = place(state, &DropEvent::new(item.id.clone(), item.template, "root"));
//!
//! assert!(placed.outcome.is_placed());
//! assert!(placed.state.palette.get(&item.id).is_none());
//! ```

mod errors;

pub mod config;
pub mod notice;
pub mod palette;
pub mod placement;
pub mod properties;
pub mod render;
pub mod session;
pub mod upload;

pub use config::{ConfigError, EditorConfig};
pub use errors::EditorError;
pub use notice::{Notice, NoticeLog, NoticeSink, Silent};
pub use palette::{IdGenerator, Palette, PaletteItem};
pub use placement::{apply_drop, place, DropEvent, EditorState, Placement, PlacementOutcome};
pub use properties::{Debounced, PropertiesEditor};
pub use render::{render, RenderPass, RenderedNode};
pub use session::EditSession;
pub use upload::{MediaKind, MediaPreview, MediaUploader, UploadError};
