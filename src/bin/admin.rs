//! CLI administration tool for SmartLinks.
//!
//! Previews what the hub shows and what the analytics page reports, for the
//! sample data or for links exported from `GET /api/links`, without starting
//! the server.
//!
//! # Usage
//!
//! ```bash
//! # Links a mobile visitor sees at 08:15
//! cargo run --bin smartlinks-admin -- hub --device mobile --at 08:15
//!
//! # Analytics for exported links and click counters
//! cargo run --bin smartlinks-admin -- analytics --links links.json --clicks clicks.json --visitors 5000
//!
//! # Validate the environment configuration
//! cargo run --bin smartlinks-admin -- config check
//! ```
//!
//! # File Formats
//!
//! - `--links`: JSON array of links, as returned by `GET /api/links`
//! - `--clicks`: JSON object mapping link id to click count, e.g. `{"1": 543}`

use smartlinks::application::services::{AnalyticsService, HubService, HubSettings};
use smartlinks::domain::aggregation::AnalyticsReport;
use smartlinks::domain::entities::{AnalyticsSnapshot, DeviceClass, Link, LinkId, parse_hhmm};
use smartlinks::domain::visibility::{ViewingContext, effective_priority};
use smartlinks::infrastructure::memory::{InMemoryLinkRepository, StaticAnalyticsRepository};
use smartlinks::infrastructure::seed::{SAMPLE_TOTAL_VISITORS, sample_analytics, sample_links};

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use colored::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for previewing SmartLinks data.
#[derive(Parser)]
#[command(name = "smartlinks-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show the links the hub displays for a device and time
    Hub {
        /// Links JSON file (defaults to the sample links)
        #[arg(short, long)]
        links: Option<PathBuf>,

        /// Visitor device: mobile, tablet or desktop
        #[arg(short, long, default_value = "desktop")]
        device: DeviceClass,

        /// Evaluate time-range rules at this time (HH:MM); ignored when absent
        #[arg(short, long, value_parser = parse_at)]
        at: Option<NaiveTime>,
    },

    /// Show the analytics report
    Analytics {
        /// Links JSON file (defaults to the sample links)
        #[arg(short, long)]
        links: Option<PathBuf>,

        /// Click counters JSON file (defaults to the sample counters)
        #[arg(short, long)]
        clicks: Option<PathBuf>,

        /// Total visitors
        #[arg(short, long, default_value_t = SAMPLE_TOTAL_VISITORS)]
        visitors: u64,
    },

    /// Configuration tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hub { links, device, at } => handle_hub(links.as_deref(), device, at).await?,
        Commands::Analytics {
            links,
            clicks,
            visitors,
        } => handle_analytics(links.as_deref(), clicks.as_deref(), visitors).await?,
        Commands::Config { action } => match action {
            ConfigAction::Check => handle_config_check()?,
        },
    }

    Ok(())
}

fn parse_at(value: &str) -> Result<NaiveTime, String> {
    parse_hhmm(value).map_err(|_| format!("'{value}' is not a time in HH:MM format"))
}

fn load_links(path: Option<&Path>) -> Result<Vec<Link>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON array of links", path.display()))
        }
        None => Ok(sample_links()),
    }
}

fn load_clicks(path: Option<&Path>) -> Result<BTreeMap<LinkId, u64>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON object of click counts", path.display()))
        }
        None => Ok(sample_analytics().clicks),
    }
}

/// Prints the hub preview.
///
/// # Output Format
///
/// ```text
/// Link Hub (desktop, time rules off)
///
///   #   Title                          Priority  URL
///   ──────────────────────────────────────────────────────────────────────
///   1   Portfolio Website              1         https://example.com/portfolio
///   2   LinkedIn                       3         https://linkedin.com/in/user
/// ```
async fn handle_hub(links: Option<&Path>, device: DeviceClass, at: Option<NaiveTime>) -> Result<()> {
    anyhow::ensure!(
        device != DeviceClass::All,
        "--device must be mobile, tablet or desktop"
    );

    let all_links = load_links(links)?;
    let total = all_links.len();
    let hub = HubService::new(
        Arc::new(InMemoryLinkRepository::with_links(all_links)),
        HubSettings::default(),
    );

    let ctx = match at {
        Some(time) => ViewingContext::new(device).at(time),
        None => ViewingContext::new(device),
    };
    let visible = hub.visible_links(&ctx).await?;

    let time_label = match at {
        Some(time) => format!("at {}", time.format("%H:%M")),
        None => "time rules off".to_string(),
    };
    println!(
        "{} ({}, {})",
        "Link Hub".bright_blue().bold(),
        device.to_string().cyan(),
        time_label.bright_black()
    );
    println!();

    if visible.is_empty() {
        println!("{}", "  No links available at the moment.".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<9} {}",
        "#".bright_white().bold(),
        "Title".bright_white().bold(),
        "Priority".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for (i, link) in visible.iter().enumerate() {
        let priority = match link.priority() {
            Some(p) => p.to_string(),
            None => format!("({})", effective_priority(link)),
        };
        println!(
            "  {:<3} {:<30} {:<9} {}",
            (i + 1).to_string().bright_black(),
            link.title.cyan(),
            priority,
            link.url.bright_black()
        );
    }

    println!();
    println!(
        "  Showing {} of {} links",
        visible.len().to_string().bright_white().bold(),
        total
    );
    println!();

    Ok(())
}

/// Prints the analytics report.
async fn handle_analytics(links: Option<&Path>, clicks: Option<&Path>, visitors: u64) -> Result<()> {
    let snapshot = AnalyticsSnapshot::new(visitors, load_clicks(clicks)?);
    let analytics = AnalyticsService::new(
        Arc::new(InMemoryLinkRepository::with_links(load_links(links)?)),
        Arc::new(StaticAnalyticsRepository::new(snapshot)),
    );

    let report = analytics.report().await?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &AnalyticsReport) {
    println!("{}", "Analytics".bright_blue().bold());
    println!();
    println!("  Total visitors: {}", report.total_visitors.to_string().bright_white().bold());
    println!("  Total clicks:   {}", report.total_clicks.to_string().bright_white().bold());
    println!("  Click rate:     {}%", report.click_rate_label().bright_white().bold());
    match &report.top {
        Some(top) => println!("  Top link:       {} ({} clicks)", top.title.cyan(), top.clicks),
        None => println!("  Top link:       {}", "N/A".bright_black()),
    }
    println!();

    if report.ranking.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        return;
    }

    println!("{}", "Clicks per Link".bright_white().bold());
    for bar in &report.chart {
        println!(
            "  {:<18} {:<25} {}",
            bar.label,
            "█".repeat((bar.percent / 4) as usize).green(),
            bar.clicks
        );
    }
    println!();

    println!(
        "  {:<5} {:<30} {:<8} {}",
        "Rank".bright_white().bold(),
        "Link Title".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(55).bright_black());
    for row in &report.ranking {
        let standing = match row.rank {
            1 => row.standing.label().green(),
            _ => row.standing.label().bright_black(),
        };
        println!(
            "  {:<5} {:<30} {:<8} {}",
            row.rank,
            row.title.cyan(),
            row.clicks,
            standing
        );
    }
    println!();
}

/// Loads configuration like the server does and reports the result.
fn handle_config_check() -> Result<()> {
    println!("{}", "Configuration Check".bright_blue().bold());
    println!();

    match smartlinks::config::load_from_env() {
        Ok(config) => {
            println!("  Listen:          {}", config.listen_addr.cyan());
            println!("  Log format:      {}", config.log_format.cyan());
            println!("  Rate limiting:   {}", config.rate_limit_enabled);
            println!("  Sample data:     {}", config.seed_sample_data);
            println!("  Hub device:      {}", config.hub_device.to_string().cyan());
            println!("  Detect device:   {}", config.hub_detect_device);
            println!("  Time rules:      {}", config.hub_time_rules);
            println!("  Secure cookie:   {}", config.session_cookie_secure);
            println!();
            println!("{}", "Configuration is valid".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {:#}", "Configuration error:".red().bold(), e);
            Err(e)
        }
    }
}
