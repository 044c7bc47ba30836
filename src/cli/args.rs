//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::cli::commands::{
    add::AddArgs, completions::CompletionsArgs, delete::DeleteArgs, edit::EditArgs,
    list::ListArgs, show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "coffee")]
#[command(author, version, about = "Coffee catalog manager")]
#[command(long_about = "A catalog manager for coffee products kept in a local SQLite file.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Database file (default: data/coffee.sqlite next to the executable)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the catalog table (and demonstration rows) if missing
    Init,

    /// Show the catalog grid
    List(ListArgs),

    /// Show one coffee
    Show(ShowArgs),

    /// Add a coffee
    Add(AddArgs),

    /// Edit a coffee
    Edit(EditArgs),

    /// Delete a coffee
    Delete(DeleteArgs),

    /// Interactive catalog view with add/edit/delete actions
    Browse,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (table for list, yaml for show)
    #[default]
    Auto,
    /// Bordered table
    Table,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}
