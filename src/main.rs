//! forum-templates CLI
//!
//! Usage: forum-templates [--config forum.toml] <COMMAND>
//!
//! Commands:
//!   compile           Rebuild every template
//!   compile-template  Recompile one template
//!   chain             Show the base-theme directories
//!   catalog           List the merged template catalog

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use forum_templates::config::Config;
use forum_templates::presentation::create_compile_use_case;
use forum_templates::presentation::output::{
    render_catalog, render_chain, render_report, OutputFormat,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (config, warnings) = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            "unknown config key"
        );
    }

    let format = OutputFormat::from_json_flag(cli.json);
    let use_case = create_compile_use_case(&config);

    match cli.command {
        Commands::Compile => {
            let report = use_case.compile_all().await?;
            println!("{}", render_report(&report, format));
        }
        Commands::CompileTemplate { name, source } => {
            let path = match source {
                Some(path) => path,
                None => config.paths.views_dir.join(name.trim_start_matches('/')),
            };
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading template source {}", path.display()))?;
            let report = use_case.compile_template(&name, text).await?;
            println!("{}", render_report(&report, format));
        }
        Commands::Chain => {
            let layers = use_case.base_layers().await?;
            println!("{}", render_chain(&layers, format));
        }
        Commands::Catalog => {
            let catalog = use_case.catalog().await?;
            println!("{}", render_catalog(&catalog, format));
        }
    }

    Ok(())
}
