//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot recommendation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored result cards
    Cards,
    /// JSON output
    Json,
}

/// CLI arguments for culturemate
#[derive(Parser, Debug)]
#[command(name = "culturemate")]
#[command(author, version, about = "Culture and travel recommendations from the CultureMate backend")]
#[command(long_about = r#"
CultureMate asks a few questions and fetches recommendations from the backend.

Three recommendation domains are available:
  exhibition   Exhibitions and cultural spaces (question, transport, duration, budget)
  festival     Regional festivals (region, season, free only)
  tour         Tourist spot search (query, number of results)

Without arguments an interactive wizard walks through home, input and result.
With --chat, messages go to the backend's agent instead.

Configuration files are loaded from (in priority order):
1. CULTUREMATE_* environment variables
2. --config <path>        Explicit config file
3. ./culturemate.toml     Project-level config
4. ~/.config/culturemate/config.toml   Global config

Example:
  culturemate
  culturemate --domain festival --answer region=서울 --answer season=봄
  culturemate --domain tour --answer query="바다가 보이는 한적한 곳" --answer topK=5 -o json
  culturemate --chat
  culturemate --chat --message "이번 주말 전시 추천해줘"
"#)]
pub struct Cli {
    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Send a single chat message and exit (requires --chat)
    #[arg(short, long, value_name = "TEXT", requires = "chat")]
    pub message: Option<String>,

    /// Run one recommendation without prompting
    #[arg(short, long, value_name = "DOMAIN", conflicts_with = "chat")]
    pub domain: Option<String>,

    /// Answer for the one-shot domain, as field=value (repeatable)
    #[arg(
        short,
        long,
        value_name = "FIELD=VALUE",
        value_parser = parse_answer,
        requires = "domain"
    )]
    pub answer: Vec<(String, String)>,

    /// Output format for one-shot results (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Backend base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Split `field=value` at the first `=`.
fn parse_answer(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected FIELD=VALUE, got '{}'", raw)),
    }
}
