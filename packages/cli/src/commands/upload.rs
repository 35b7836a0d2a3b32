use crate::document::{load_state, save_state};
use anyhow::{anyhow, Context, Result};
use canvas_editor::{EditSession, EditorConfig, MediaUploader};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Image or video to upload
    pub file: PathBuf,

    /// Content node that shows the media
    #[arg(short, long)]
    pub node: String,

    /// Document holding the node
    #[arg(short, long, default_value = "layout.json")]
    pub document: PathBuf,

    /// Media host (overrides config)
    #[arg(long)]
    pub host: Option<String>,
}

pub async fn upload(args: UploadArgs, cwd: &Path) -> Result<()> {
    let mut config = EditorConfig::load(cwd)?;
    if let Some(host) = args.host {
        config.api_host = host;
    }

    let file_path = cwd.join(&args.file);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("Not a file: {}", file_path.display()))?;
    let mime = mime_for(&file_name);
    let bytes = tokio::fs::read(&file_path)
        .await
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let document_path = cwd.join(&args.document);
    let state = load_state(&document_path)?;
    let uploader = MediaUploader::new(&config.api_host);

    println!("{} {} → {}", "⬆️".bright_blue(), file_name, uploader.endpoint());

    let mut session = EditSession::new("cli", state, config);
    let result = session
        .upload_media(&args.node, &file_name, mime, bytes, &uploader)
        .await;

    for notice in session.notices().drain() {
        if notice.is_error() {
            eprintln!("  {} {}", "✗".red(), notice.to_string().red());
        } else {
            println!("  {} {}", "✓".green(), notice);
        }
    }

    let url = result?;
    save_state(&document_path, session.state())?;
    println!("   {}", url.bright_white());

    Ok(())
}

/// MIME type guessed from the file extension
fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}
