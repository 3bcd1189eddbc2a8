use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// forum-templates - theme-aware template compiler
#[derive(Parser, Debug)]
#[command(name = "forum-templates")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "forum.toml", global = true)]
    pub config: PathBuf,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild every template into a fresh views directory
    Compile,

    /// Recompile a single template against the existing views directory
    CompileTemplate {
        /// Logical template name (e.g. partials/topic.tpl)
        name: String,

        /// Read the template source from this file instead of the views directory
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Show the base-theme template directories, ancestor first
    Chain,

    /// List the merged template catalog without writing anything
    Catalog,
}

impl Cli {
    /// Default tracing filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
