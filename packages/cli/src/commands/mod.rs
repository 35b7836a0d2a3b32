pub mod apply;
pub mod init;
pub mod render;
pub mod upload;

pub use apply::{apply, ApplyArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use upload::{upload, UploadArgs};
