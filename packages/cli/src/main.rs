mod commands;
mod document;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, init, render, upload, ApplyArgs, InitArgs, RenderArgs, UploadArgs};
use tracing_subscriber::EnvFilter;

/// Canvas CLI - edit nested grid/flex layouts from the terminal
#[derive(Parser, Debug)]
#[command(name = "canvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a layout document with a starter palette
    Init(InitArgs),

    /// Print a document the way the canvas draws it
    Render(RenderArgs),

    /// Apply a file of drop events to a document
    Apply(ApplyArgs),

    /// Upload media for a content node
    Upload(UploadArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match std::env::current_dir() {
        Ok(cwd) => match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Render(args) => render(args, &cwd),
            Command::Apply(args) => apply(args, &cwd),
            Command::Upload(args) => upload(args, &cwd).await,
        },
        Err(err) => Err(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
