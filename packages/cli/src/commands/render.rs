use crate::document::load_state;
use anyhow::Result;
use canvas_editor::{EditSession, EditorConfig};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document to render
    #[arg(default_value = "layout.json")]
    pub document: PathBuf,

    /// Deepest level to draw (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print the render pass as JSON instead of an outline
    #[arg(long)]
    pub json: bool,
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let mut config = EditorConfig::load(cwd)?;
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    let state = load_state(&cwd.join(&args.document))?;
    let session = EditSession::new("cli", state, config);
    let pass = session.render();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pass)?);
    } else {
        print!("{}", pass.outline());
    }

    for notice in session.notices().drain() {
        eprintln!("{} {}", "⚠️".yellow(), notice.to_string().yellow());
    }

    Ok(())
}
