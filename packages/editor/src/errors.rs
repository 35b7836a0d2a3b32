//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] canvas_tree::MutationError),

    #[error("Upload error: {0}")]
    Upload(#[from] crate::upload::UploadError),

    #[error("Duplicate palette item: {0}")]
    DuplicatePaletteItem(String),

    #[error("No properties editor open for: {0}")]
    NoEditor(String),
}
