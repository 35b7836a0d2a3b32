use anyhow::{Context, Result};
use canvas_editor::{EditorState, Palette};
use canvas_tree::LayoutTree;
use std::fs;
use std::path::Path;

/// Load a document file. Accepts either a full editor state
/// (`{ "tree": ..., "palette": [...] }`) or a bare layout tree.
pub fn load_state(path: &Path) -> Result<EditorState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    if value.get("tree").is_some() {
        return serde_json::from_value(value)
            .with_context(|| format!("Invalid editor state in {}", path.display()));
    }

    let tree: LayoutTree = serde_json::from_value(value)
        .with_context(|| format!("Invalid layout tree in {}", path.display()))?;
    Ok(EditorState::new(tree, Palette::new()))
}

pub fn save_state(path: &Path, state: &EditorState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
