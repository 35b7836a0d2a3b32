//! # Palette
//!
//! Templates waiting to be dragged onto the canvas. Each item already has
//! the id its node will keep once placed; the palette mints those ids.

use canvas_tree::{walk, NodeKind, NodeTemplate};
use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::placement::EditorState;
use crate::EditorError;

/// Generate a stable seed from a document name using CRC32
pub fn get_document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for palette items
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(document: &str) -> Self {
        Self::from_seed(get_document_seed(document))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generator for a document that already has nodes and palette items.
    /// Numbering continues after the highest `{seed}-n` in use.
    pub fn resume(document: &str, state: &EditorState) -> Self {
        let tree_ids = walk(&state.tree).map(|(node, _)| node.id.as_str());
        let palette_ids = state.palette.iter().map(|item| item.id.as_str());
        Self::new(document).skip_taken(tree_ids.chain(palette_ids))
    }

    /// Advance past every `{seed}-n` in `ids`
    pub fn skip_taken<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        for id in ids {
            let taken = id
                .strip_prefix(self.seed.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|n| n.parse::<u32>().ok());
            if let Some(n) = taken {
                self.count = self.count.max(n);
            }
        }
        self
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub template: NodeTemplate,
}

/// Ordered set of pending items, unique by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    items: Vec<PaletteItem>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// One item per layout primitive
    pub fn standard(ids: &mut IdGenerator) -> Self {
        let mut palette = Self::new();
        let spans = |template: NodeTemplate| template.with_span("1", "1");

        palette.mint(ids, "Flex", spans(NodeTemplate::new(NodeKind::Flex).with_grid("1", "1")));
        palette.mint(ids, "Grid", spans(NodeTemplate::new(NodeKind::Grid).with_grid("2", "2")));
        palette.mint(ids, "Content", spans(NodeTemplate::new(NodeKind::Content).with_grid("1", "1")));
        palette
    }

    /// Create an item with a fresh id and append it
    pub fn mint(&mut self, ids: &mut IdGenerator, label: &str, template: NodeTemplate) -> &PaletteItem {
        let index = self.items.len();
        self.items.push(PaletteItem {
            id: ids.new_id(),
            label: label.to_string(),
            thumbnail: None,
            template,
        });
        &self.items[index]
    }

    pub fn push(&mut self, item: PaletteItem) -> Result<(), EditorError> {
        if self.get(&item.id).is_some() {
            return Err(EditorError::DuplicatePaletteItem(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<PaletteItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&PaletteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
