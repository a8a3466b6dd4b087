use anyhow::Context;
use smartlinks::config;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; variables may come from the environment.
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;

    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    smartlinks::server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{log_level}'"))?;

    let registry = tracing_subscriber::registry().with(filter);
    if log_format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    Ok(())
}
