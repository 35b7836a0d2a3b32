use crate::document::{load_state, save_state};
use anyhow::{Context, Result};
use canvas_editor::{DropEvent, EditSession, EditorConfig, PlacementOutcome};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Document to edit
    #[arg(default_value = "layout.json")]
    pub document: PathBuf,

    /// JSON file with an array of drop events
    #[arg(short, long)]
    pub drops: PathBuf,

    /// Where to write the result (defaults to the input document)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Report outcomes without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let config = EditorConfig::load(cwd)?;
    let document_path = cwd.join(&args.document);
    let state = load_state(&document_path)?;

    let drops_path = cwd.join(&args.drops);
    let content = fs::read_to_string(&drops_path)
        .with_context(|| format!("Failed to read {}", drops_path.display()))?;
    let events: Vec<DropEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid drop events in {}", drops_path.display()))?;

    println!("{}", "🧩 Applying drops...".bright_blue().bold());

    let mut session = EditSession::new("cli", state, config);
    let mut placed = 0;

    for event in &events {
        let label = format!("{} → {}", event.moving_id, event.target_parent_id);
        match session.drop_item(event) {
            PlacementOutcome::Placed(outcome) => {
                placed += 1;
                println!("  {} {} ({:?})", "✓".green(), label, outcome);
            }
            PlacementOutcome::Ignored => {
                println!("  {} {} (no change)", "-".dimmed(), label);
            }
            PlacementOutcome::Rejected(err) => {
                println!("  {} {} - {}", "✗".red(), label, err.to_string().red());
            }
        }
    }

    println!();
    println!("{} Placed {} of {} drops", "✅".green(), placed, events.len());

    if args.dry_run {
        return Ok(());
    }

    let out_path = args
        .out
        .as_ref()
        .map(|out| cwd.join(out))
        .unwrap_or(document_path);
    save_state(&out_path, session.state())?;
    println!("   Wrote {}", out_path.display());

    Ok(())
}
