use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::client::PacerClient;
use crate::config::Config;
use crate::engine::{Engine, classify};
use crate::history_store::{HistoryStore, store_for};
use crate::models::{CaseCategory, RunMode};
use crate::notify::{format_cost, notifier_for};
use crate::utils::default_config_path;

#[derive(Parser)]
#[command(name = "pacer-watch")]
#[command(version = "0.1.0")]
#[command(about = "Report newly filed PACER cases since the last search", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read configuration from PACER_* environment variables instead of a file
    #[arg(long, global = true, conflicts_with = "config")]
    pub env: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the last two days (four on Mondays) and report new cases
    Daily,
    /// Search the last seven days and report new cases
    Weekly,
    /// Show statistics about the retained case history
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Daily => run_search(&config, RunMode::Daily),
        Commands::Weekly => run_search(&config, RunMode::Weekly),
        Commands::Stats => {
            let store = store_for(&config.history)?;
            show_stats(store.as_ref())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = if cli.env {
        Config::from_env().context("Invalid environment configuration")?
    } else {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        Config::load(&path)?
    };
    config.log_redacted();
    Ok(config)
}

fn run_search(config: &Config, mode: RunMode) -> Result<()> {
    let client = PacerClient::new(&config.pacer.auth_host, &config.pacer.api_host);
    let store = store_for(&config.history)?;
    let notifier = notifier_for(&config.notify);
    let now = Utc::now().with_timezone(&config.pacer.court_tz);

    let summary =
        Engine::new(config, &client, &client, store.as_ref(), notifier.as_ref()).run(mode, &now)?;

    tracing::info!(
        %mode,
        window = %summary.window,
        pages = summary.pages,
        searched = summary.searched,
        new_cases = summary.new_cases,
        cost = %format_cost(summary.cost),
        retained = summary.history_len,
        "Run complete"
    );
    Ok(())
}

fn show_stats(store: &dyn HistoryStore) -> Result<()> {
    let history = store.load()?;

    let united_states =
        history.iter().filter(|case| classify(case) == CaseCategory::UnitedStatesParty).count();
    let other = history.len() - united_states;

    println!("PACER Case History Statistics");
    println!("=============================");
    println!("Retained cases: {}", history.len());
    println!("  {}: {}", CaseCategory::UnitedStatesParty.label(), united_states);
    println!("  {}: {}", CaseCategory::Other.label(), other);
    println!();
    println!("History location: {}", store.location());

    if let Some(newest) = history.iter().map(|case| case.date_filed).max() {
        println!("Newest filing: {}", newest.format("%Y-%m-%d"));
    }
    if let Some(oldest) = history.iter().map(|case| case.date_filed).min() {
        println!("Oldest filing: {}", oldest.format("%Y-%m-%d"));
    }

    Ok(())
}
