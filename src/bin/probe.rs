//! Command-line visibility checks.
//!
//! Runs the same analysis as `POST /api/search` without the HTTP server,
//! using the provider settings from the environment.
//!
//! # Usage
//!
//! ```bash
//! # Full analysis with a coloured report
//! cargo run --bin probe -- check stripe.com
//!
//! # Same, as JSON
//! cargo run --bin probe -- check stripe.com --json
//!
//! # Show the prompts a domain would be probed with
//! cargo run --bin probe -- prompts notion.so
//!
//! # Produce an AUTH_PASSWORD_HASH value
//! cargo run --bin probe -- hash-password
//! ```
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`, `GOOGLE_API_KEY`: provider credentials (optional)
//! - `AUTH_SIGNING_SECRET`: required by `hash-password`

use cited::application::services::auth_service::hash_password;
use cited::config::AnalysisConfig;
use cited::domain::entities::{
    ChangeDirection, DomainAnalysis, HighlightKind, ProbeStatus, PromptStatus,
};
use cited::server::build_analysis_service;
use cited::utils::domain_validator::validate_domain;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

/// CLI tool for checking AI visibility.
#[derive(Parser)]
#[command(name = "probe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a domain across all providers
    Check {
        /// Domain to analyze (prompted for if omitted)
        domain: Option<String>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompts a domain would be probed with
    Prompts {
        domain: String,
    },

    /// Hash a password for AUTH_PASSWORD_HASH
    HashPassword,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { domain, json } => check(domain, json).await?,
        Commands::Prompts { domain } => prompts(&domain)?,
        Commands::HashPassword => hash()?,
    }

    Ok(())
}

fn load_analysis_config() -> Result<AnalysisConfig> {
    let config = AnalysisConfig::from_env();
    config.validate().context("Invalid provider configuration")?;
    Ok(config)
}

async fn check(domain: Option<String>, json: bool) -> Result<()> {
    let raw = match domain {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Domain")
            .with_initial_text("example.com")
            .interact_text()?,
    };
    let domain = validate_domain(&raw).with_context(|| format!("'{}' is not a domain", raw))?;

    let config = load_analysis_config()?;
    let service = build_analysis_service(&config)?;

    if !json {
        println!("{}", "🔎 AI Visibility Check".bright_blue().bold());
        println!();
        for key in config.missing_credentials() {
            println!("{}", format!("⚠️  {} not set, that provider will score 0", key).yellow());
        }
        println!("  Probing {} (this may take 30-60 seconds)...", domain.as_str().cyan());
        println!();
    }

    let analysis = service.analyze(&domain).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }

    Ok(())
}

/// Prints the analysis as a terminal report.
///
/// # Output Format
///
/// ```text
/// stripe.com  Overall 44  (4 mentions)
///
///   Provider   Score  Mentions  Status
///   ChatGPT    87     4         Domain found in responses
///   Gemini     0      0         Domain not found
/// ```
fn print_report(analysis: &DomainAnalysis) {
    println!(
        "{}  Overall {}  ({} mentions)",
        analysis.domain.as_str().bright_white().bold(),
        score_colored(analysis.overall_score).bold(),
        analysis.total_mentions()
    );
    println!();

    println!(
        "  {:<10} {:<6} {:<9} {}",
        "Provider".bright_white().bold(),
        "Score".bright_white().bold(),
        "Mentions".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());
    for result in analysis.results() {
        let status = match result.status {
            ProbeStatus::Ok => result.status_note.normal(),
            _ => result.status_note.red(),
        };
        println!(
            "  {:<10} {:<6} {:<9} {}",
            result.provider.display_name().cyan(),
            score_colored(result.score),
            result.mentions,
            status
        );
    }
    println!();

    println!("{}", "Trend".bright_white().bold());
    let trend: Vec<String> = analysis
        .trends
        .iter()
        .map(|point| format!("{} {}", point.period, point.score))
        .collect();
    println!("  {}", trend.join("  →  ").bright_black());
    println!();

    println!("{}", "Prompts".bright_white().bold());
    for row in &analysis.prompts {
        let marker = match row.status {
            PromptStatus::Visible => "✓".green(),
            PromptStatus::NotVisible => "✗".red(),
        };
        println!("  {} {}", marker, row.title);
    }
    println!();

    println!("{}", "Competitors".bright_white().bold());
    for entry in &analysis.competitors {
        let change = match entry.change {
            ChangeDirection::Up => format!("▲{}%", entry.change_value).green(),
            ChangeDirection::Down => format!("▼{}%", entry.change_value).red(),
            ChangeDirection::Neutral => "–".bright_black(),
        };
        println!(
            "  {:<3} {:<20} {:<5} {}",
            entry.rank.to_string().bright_black(),
            entry.brand,
            entry.score,
            change
        );
    }
    println!();

    if !analysis.highlights.is_empty() {
        println!("{}", "Highlights".bright_white().bold());
        for highlight in &analysis.highlights {
            let title = match highlight.kind {
                HighlightKind::VisibilityDrop => highlight.title.red(),
                HighlightKind::MissedPrompt => highlight.title.yellow(),
                HighlightKind::NewCompetitor => highlight.title.green(),
            };
            println!("  {} ({})", title, highlight.value.bright_black());
            println!("    {}", highlight.description);
        }
        println!();
    }
}

fn score_colored(score: u8) -> ColoredString {
    let text = score.to_string();
    match score {
        70.. => text.green(),
        30..=69 => text.yellow(),
        _ => text.red(),
    }
}

fn prompts(raw: &str) -> Result<()> {
    let domain = validate_domain(raw).with_context(|| format!("'{}' is not a domain", raw))?;
    let config = load_analysis_config()?;
    let service = build_analysis_service(&config)?;

    println!("{}", "📝 Prompts".bright_blue().bold());
    println!(
        "  Category: {}",
        service.category_for(&domain).unwrap_or("generic").cyan()
    );
    println!();
    for (i, prompt) in service.prompts_for(&domain).iter().enumerate() {
        let line = format!("  {}. {}", i + 1, prompt);
        if i < config.prompts_per_probe {
            println!("{}", line);
        } else {
            println!("{}", format!("{} (not probed)", line).bright_black());
        }
    }
    println!();

    Ok(())
}

fn hash() -> Result<()> {
    let secret =
        std::env::var("AUTH_SIGNING_SECRET").context("AUTH_SIGNING_SECRET must be set")?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "Add this to your environment:".bright_white());
    println!(
        "  AUTH_PASSWORD_HASH={}",
        hash_password(&secret, &password).bright_yellow()
    );
    println!();

    Ok(())
}
