use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "contype", about = concat!("contype v", env!("CARGO_PKG_VERSION"), " - choose what your next piece is about"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List content categories
    Categories,
    /// List the preset titles of a category
    Titles(TitlesArgs),
    /// Show the suggestions a query produces in a category
    Suggest(SuggestArgs),
    /// Fill the step without the TUI and print what Next hands off
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct TitlesArgs {
    /// Category id (case-sensitive)
    pub category: String,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Category id (case-sensitive)
    pub category: String,
    /// Text typed into the title field (not trimmed)
    pub query: String,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Category to select (default: the configured default category)
    #[arg(long)]
    pub category: Option<String>,
    /// Pick a preset title of the category
    #[arg(long, conflicts_with = "text")]
    pub pick: Option<String>,
    /// Use free text as the title
    #[arg(long)]
    pub text: Option<String>,
    /// Target word count (clamped and rounded onto the slider)
    #[arg(long)]
    pub words: Option<u32>,
}
