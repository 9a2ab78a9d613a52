//! Masthead CLI
//!
//! Inspect the brand theme catalog and the design tokens behind it.
//!
//! # Usage
//!
//! ```bash
//! # List brands and their data-theme values
//! masthead brands
//!
//! # Role map of one brand
//! masthead theme road-and-track --format json
//!
//! # Follow a reference through a brand's tokens
//! masthead resolve '{color.header.bg}' --brand esquire
//!
//! # Report every token that does not resolve
//! masthead --tokens ./tokens audit
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::MastheadConfig;

#[derive(Parser)]
#[command(name = "masthead")]
#[command(version)]
#[command(about = "Brand themes and design tokens for Masthead sites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./masthead.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Token directory to load instead of the embedded documents
    #[arg(long, global = true)]
    tokens: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog brands
    Brands,

    /// Print the resolved roles of a brand
    Theme {
        /// Brand id (camelCase or kebab-case); defaults to the configured brand
        brand: Option<String>,
    },

    /// Resolve a token reference such as {color.brand.primary}
    Resolve {
        reference: String,

        /// Brand whose tokens to resolve against
        #[arg(short, long)]
        brand: Option<String>,

        /// Fetch the token document from this URL instead
        #[arg(long, conflicts_with = "brand")]
        url: Option<String>,
    },

    /// Resolve every token of every brand and report failures
    Audit,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,masthead_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MastheadConfig::load(path)?,
        None => MastheadConfig::load_from_dir(&std::env::current_dir()?)?,
    };
    if let Some(dir) = cli.tokens {
        config.theme.tokens_dir = Some(dir);
    }

    let ctx = commands::Context::new(config, cli.format);
    match cli.command {
        Commands::Brands => commands::brands(&ctx),
        Commands::Theme { brand } => commands::theme(&ctx, brand.as_deref()),
        Commands::Resolve {
            reference,
            brand,
            url,
        } => match url {
            Some(url) => commands::resolve_remote(&ctx, &reference, &url).await,
            None => commands::resolve(&ctx, &reference, brand.as_deref()),
        },
        Commands::Audit => commands::audit(&ctx),
    }
}
