use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wallet_sections::config::{default_config_path, Config};
use wallet_sections::models::WalletState;
use wallet_sections::preload::{PreloadTask, RecordingImageLoader};
use wallet_sections::sections::WalletSections;
use wallet_sections::WalletSectionsPipeline;

#[derive(Parser)]
#[command(name = "wallet-sections")]
#[command(about = "Build wallet display sections from a state snapshot")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show current configuration
    Config,
    /// Compose sections for a JSON wallet state file
    Compose {
        /// Wallet state snapshot (JSON)
        #[arg(short, long)]
        state: PathBuf,

        /// Active account the state belongs to
        #[arg(short, long)]
        account: Option<String>,
    },
}

#[derive(Serialize)]
struct ComposeReport<'a> {
    #[serde(flatten)]
    sections: &'a WalletSections,
    preload: Vec<PreloadTask>,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}

fn load_state(path: &Path) -> Result<WalletState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wallet state: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse wallet state: {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = Config::load_or_default(&config_path)?;

    match cli.command {
        Command::Config => {
            println!("# Config file: {}", config_path.display());
            print!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);
        }
        Command::Compose { state, account } => {
            let state = load_state(&state)?;
            let loader = Arc::new(RecordingImageLoader::new());
            let mut pipeline = WalletSectionsPipeline::new(config, loader.clone())?;
            if let Some(account) = account {
                pipeline.switch_account(account);
            }

            let sections = pipeline.compose(&state);
            let report = ComposeReport {
                sections: &sections,
                preload: loader.dispatched(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
