//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Variables may also come from a `.env` file (loaded by `main.rs` via `dotenvy`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting of public routes (default: `true`)
//! - `SEED_SAMPLE_DATA` - Start with the sample links and analytics (default: `true`)
//! - `HUB_DEVICE` - Device assumed for hub visitors: `mobile`, `tablet` or `desktop` (default: `desktop`)
//! - `HUB_DETECT_DEVICE` - Classify visitors by `User-Agent` (default: `false`)
//! - `HUB_TIME_RULES` - Evaluate time-range rules with the local time (default: `false`)
//! - `HUB_PROFILE_NAME` - Hub page heading (default: `Your Name`)
//! - `HUB_PROFILE_BIO` - Hub page subtitle
//! - `SESSION_COOKIE_SECURE` - Mark the session cookie `Secure` (default: `false`)
//!
//! No variable is required.

use anyhow::{Context, Result};
use std::env;

use crate::application::services::HubSettings;
use crate::domain::entities::DeviceClass;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, no route is rate limited. Intended for local development.
    pub rate_limit_enabled: bool,
    /// Load the three sample links and their click counters at startup.
    pub seed_sample_data: bool,

    // ── Hub page ────────────────────────────────────────────────────────────
    pub hub_device: DeviceClass,
    pub hub_detect_device: bool,
    pub hub_time_rules: bool,
    pub hub_profile_name: String,
    pub hub_profile_bio: String,

    /// Adds `Secure` to the session cookie. Enable when served over HTTPS.
    pub session_cookie_secure: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `HUB_DEVICE` is not a known device class.
    pub fn from_env() -> Result<Self> {
        let defaults = HubSettings::default();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let rate_limit_enabled = env_flag("RATE_LIMIT_ENABLED", true);
        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", true);

        let hub_device = match env::var("HUB_DEVICE") {
            Ok(raw) => raw
                .parse::<DeviceClass>()
                .context("HUB_DEVICE is not a valid device class")?,
            Err(_) => defaults.default_device,
        };
        let hub_detect_device = env_flag("HUB_DETECT_DEVICE", defaults.detect_device);
        let hub_time_rules = env_flag("HUB_TIME_RULES", defaults.time_rules);
        let hub_profile_name = env::var("HUB_PROFILE_NAME").unwrap_or(defaults.profile_name);
        let hub_profile_bio = env::var("HUB_PROFILE_BIO").unwrap_or(defaults.profile_bio);

        let session_cookie_secure = env_flag("SESSION_COOKIE_SECURE", false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            rate_limit_enabled,
            seed_sample_data,
            hub_device,
            hub_detect_device,
            hub_time_rules,
            hub_profile_name,
            hub_profile_bio,
            session_cookie_secure,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `hub_device` is `all` (a visitor always has one concrete device)
    /// - `hub_profile_name` is blank
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.hub_device == DeviceClass::All {
            anyhow::bail!("HUB_DEVICE must be 'mobile', 'tablet' or 'desktop', got 'all'");
        }

        if self.hub_profile_name.trim().is_empty() {
            anyhow::bail!("HUB_PROFILE_NAME must not be empty");
        }

        Ok(())
    }

    /// Settings for the public hub page.
    pub fn hub_settings(&self) -> HubSettings {
        HubSettings {
            default_device: self.hub_device,
            detect_device: self.hub_detect_device,
            time_rules: self.hub_time_rules,
            profile_name: self.hub_profile_name.clone(),
            profile_bio: self.hub_profile_bio.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limiting: {}",
            enabled_label(self.rate_limit_enabled)
        );
        tracing::info!("  Sample data: {}", enabled_label(self.seed_sample_data));
        tracing::info!(
            "  Hub device: {} (detection {})",
            self.hub_device,
            enabled_label(self.hub_detect_device)
        );
        tracing::info!("  Hub time rules: {}", enabled_label(self.hub_time_rules));
        tracing::info!(
            "  Secure session cookie: {}",
            enabled_label(self.session_cookie_secure)
        );
    }
}

/// Reads a boolean flag. `true`/`1`/`yes` (any case) are true, anything else false.
fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes")
}

fn enabled_label(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
