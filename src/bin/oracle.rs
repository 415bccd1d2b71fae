//! Command-line client for tarot-oracle.
//!
//! Performs draws and yes/no consultations straight from the terminal using
//! the same configuration and upstream clients as the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Draw three cards
//! cargo run --bin oracle -- tarot
//!
//! # Reproducible card selection
//! cargo run --bin oracle -- tarot --seed 42
//!
//! # Ask the yes/no oracle
//! cargo run --bin oracle -- yesno --force yes
//!
//! # Show the loaded configuration
//! cargo run --bin oracle -- config
//! ```
//!
//! # Environment Variables
//!
//! - `PIXABAY_API_KEY`, `ANTHROPIC_API_KEY`: needed for `tarot`
//! - See [`tarot_oracle::config`] for the rest

use tarot_oracle::config::{self, Config, mask_secret};
use tarot_oracle::domain::entities::{Answer, ForcedAnswer, TarotResult};
use tarot_oracle::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// CLI client for tarot-oracle.
#[derive(Parser)]
#[command(name = "oracle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw three tarot cards and read their fortune
    Tarot {
        /// Seed for keyword choice and card selection
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Ask the yes/no oracle
    Yesno {
        /// Force the answer
        #[arg(short, long, value_enum)]
        force: Option<ForceArg>,
    },

    /// Show the loaded configuration (secrets masked)
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ForceArg {
    Yes,
    No,
}

impl From<ForceArg> for ForcedAnswer {
    fn from(arg: ForceArg) -> Self {
        match arg {
            ForceArg::Yes => ForcedAnswer::Yes,
            ForceArg::No => ForcedAnswer::No,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Tarot { seed } => draw_tarot(&config, seed).await?,
        Commands::Yesno { force } => ask_yes_no(&config, force.map(Into::into)).await?,
        Commands::Config => show_config(&config),
    }

    Ok(())
}

/// Performs one draw and prints the cards and the reading.
async fn draw_tarot(config: &Config, seed: Option<u64>) -> Result<()> {
    let state = AppState::from_config(config)?;

    if !config.has_draw_credentials() {
        println!(
            "{}",
            "⚠️  PIXABAY_API_KEY or ANTHROPIC_API_KEY is not set".yellow()
        );
    }

    println!("{}", "🔮 Drawing three cards...".bright_magenta().bold());
    println!();

    let result = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            state.tarot_service.draw_with_rng(&mut rng).await
        }
        None => state.tarot_service.draw().await,
    };

    match result {
        Ok(result) => {
            print_reading(&result);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌ The cards stayed hidden:".red().bold(), e);
            anyhow::bail!("tarot draw failed")
        }
    }
}

/// Prints a reading.
///
/// # Output Format
///
/// ```text
/// PAST  moon, night, sky
///   https://pixabay.com/get/...
///   🌙 A quiet chapter closes.
///
/// ...
///
/// 🌟 Today's fortune
///   ✨ Trust the stars tonight.
/// ```
fn print_reading(result: &TarotResult) {
    let readings = result.fortune.card_readings();

    for ((position, card), reading) in result.images.positioned().zip(readings) {
        println!(
            "{}  {}",
            position.to_string().to_uppercase().bright_cyan().bold(),
            card.tags.dimmed()
        );
        println!("  {}", card.webformat_url.bright_black());
        println!("  {}", reading);
        println!();
    }

    println!("{}", "🌟 Today's fortune".bright_yellow().bold());
    println!("  {}", result.fortune.summary);
}

/// Consults the yes/no oracle once.
async fn ask_yes_no(config: &Config, force: Option<ForcedAnswer>) -> Result<()> {
    let state = AppState::from_config(config)?;

    let answer = state
        .oracle_service
        .consult(force)
        .await
        .context("The oracle is silent")?;

    let text = match answer.answer {
        Answer::Yes => "YES".green().bold(),
        Answer::No => "NO".red().bold(),
        Answer::Maybe => "MAYBE".yellow().bold(),
    };

    println!("{}", text);
    if answer.forced {
        println!("{}", "(forced)".dimmed());
    }
    println!("{}", answer.image.bright_black());

    Ok(())
}

/// Prints the configuration with secrets masked.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Listen:            {}", config.listen_addr.cyan());
    println!("  Log:               {} ({})", config.log_level, config.log_format);
    println!("  Image search:      {}", config.pixabay_base_url.cyan());
    println!("    API key:         {}", key_status(&config.pixabay_api_key));
    println!("    per_page:        {}", config.image_page_size);
    println!("  Text generation:   {}", config.anthropic_base_url.cyan());
    println!("    API key:         {}", key_status(&config.anthropic_api_key));
    println!("    Model:           {}", config.anthropic_model);
    println!("    Max tokens:      {}", config.anthropic_max_tokens);
    println!("    Language:        {}", config.fortune_language);
    println!("  Yes/no oracle:     {}", config.yesno_base_url.cyan());
    println!("  Upstream timeout:  {}s", config.upstream_timeout_seconds);
    println!("  Error detail:      {}", config.expose_error_detail);
}

fn key_status(key: &str) -> ColoredString {
    if key.is_empty() {
        "NOT SET".red().bold()
    } else {
        mask_secret(key).green()
    }
}
