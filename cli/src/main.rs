//! dotm-ns: print the DOTM key namespace.
//!
//! # Usage
//!
//! ```text
//! dotm-ns show
//! dotm-ns --history-key run42 show --format json
//! dotm-ns get nodes-checks
//! dotm-ns categories
//! ```

mod output;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotm_core::{Category, NamespaceConfig};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "dotm-ns")]
#[command(about = "Show DOTM Redis key prefixes", long_about = None)]
struct Cli {
    /// Path to a YAML namespace config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// History key to scope nodes, connections, services, resolver and checks to
    #[arg(short = 'k', long, global = true)]
    history_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every prefix
    Show,
    /// Print one prefix
    Get {
        /// Category name, e.g. `nodes` or `services-checks`
        category: Category,
    },
    /// List categories and whether they follow the history key
    Categories,
}


fn main() {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{}", out);
            }
        }
        Err(e) => {
            eprintln!("dotm-ns: {:#}", e);
            process::exit(1);
        }
    }
}


fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}


fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Categories => output::render_categories(cli.format),
        Commands::Show => {
            let ns = resolve_config(cli)?.namespace();
            output::render_namespace(&ns, cli.format)
        }
        Commands::Get { category } => {
            let ns = resolve_config(cli)?.namespace();
            output::render_category(&ns, *category, cli.format)
        }
    }
}


/// Flag, then `DOTM_HISTORY_KEY`, then the config file.
fn resolve_config(cli: &Cli) -> Result<NamespaceConfig> {
    let from_file = match &cli.config {
        Some(path) => NamespaceConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NamespaceConfig::default(),
    };
    let from_flag = NamespaceConfig {
        history_key: cli.history_key.clone(),
    };
    let config = from_file.merge(NamespaceConfig::from_env()).merge(from_flag);
    debug!(history_key = ?config.history_key, "resolved namespace config");
    Ok(config)
}
