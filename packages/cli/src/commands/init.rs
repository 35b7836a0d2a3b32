use crate::document::save_state;
use anyhow::Result;
use canvas_editor::config::DEFAULT_CONFIG_NAME;
use canvas_editor::{EditorConfig, EditorState, IdGenerator, Palette};
use canvas_tree::{LayoutTree, NodeKind, NodeTemplate};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Document file to create
    #[arg(default_value = "layout.json")]
    pub document: String,

    /// Root grid columns
    #[arg(long, default_value = "2")]
    pub columns: String,

    /// Root grid rows
    #[arg(long, default_value = "2")]
    pub rows: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let document_path = cwd.join(&args.document);

    if document_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), args.document.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Canvas layout...".bright_blue().bold());

    let root = NodeTemplate::new(NodeKind::Grid)
        .with_grid(args.columns.as_str(), args.rows.as_str())
        .with_span("1", "1");
    let mut ids = IdGenerator::new(&args.document);
    let state = EditorState::new(LayoutTree::new("root", &root), Palette::standard(&mut ids));

    save_state(&document_path, &state)?;
    println!("  {} Created {}", "✓".green(), args.document);

    let config_path = cwd.join(DEFAULT_CONFIG_NAME);
    if !config_path.exists() || args.force {
        fs::write(&config_path, serde_json::to_string_pretty(&EditorConfig::default())?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("{}", "✅ Layout initialized!".green().bold());
    println!();
    println!("Palette:");
    for item in state.palette.iter() {
        println!("  {} {}", item.id.bright_white(), item.label.dimmed());
    }

    Ok(())
}
