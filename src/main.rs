//! Command-line harness for the detection core
//!
//! Lets the classification, probing, and reconciliation logic run against
//! saved page snapshots outside a browser.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{Color, Colorize};
use std::fs;
use std::path::PathBuf;
use wp_env_badge::models::ColorToken;
use wp_env_badge::{classify_url, parse_document, probe, run_detection, MemoryStore};

#[derive(Parser)]
#[command(name = "wp-env-badge", version, about = "WordPress environment detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a URL as development, staging, or production
    Classify { url: String },
    /// Probe a saved HTML page for version, language, and theme
    Probe {
        file: PathBuf,
        #[arg(long, default_value = "http://localhost/")]
        url: String,
    },
    /// Run a full detection pass (reconcile + persist) on a saved page
    Detect {
        file: PathBuf,
        #[arg(long)]
        url: String,
    },
}

fn terminal_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Green => Color::Green,
        ColorToken::Teal => Color::Cyan,
        ColorToken::Orange => Color::Yellow,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { url } => match classify_url(&url) {
            Some(env) => {
                println!(
                    "{} ({})",
                    env.label.color(terminal_color(env.color)).bold(),
                    env.short_code()
                );
            }
            None => println!("{}", "Production (no badge)".dimmed()),
        },
        Commands::Probe { file, url } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let doc = parse_document(&html, &url);
            let info = probe(&doc);
            println!("version:  {}", info.version);
            println!("language: {}", info.language);
            println!("theme:    {}", info.theme);
        }
        Commands::Detect { file, url } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let mut doc = parse_document(&html, &url);
            let mut store = MemoryStore::new();
            let report = run_detection(&mut doc, &mut store)?;

            match &report.environment {
                Some(env) => println!(
                    "environment: {}",
                    env.label.color(terminal_color(env.color)).bold()
                ),
                None => println!("environment: {}", "production".dimmed()),
            }
            println!("badge inserted: {}", report.badge_inserted);
            println!("stored: {}", serde_json::to_string_pretty(&report.stored)?);
        }
    }

    Ok(())
}
