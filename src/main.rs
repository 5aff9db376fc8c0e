use std::sync::Arc;

use passforge::{bot, bot::admin::AdminRegistry, config::AppConfig, generator::Wordlist};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passforge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Passforge v{}", env!("CARGO_PKG_VERSION"));

    // Pick up .env before the config layer reads the environment
    dotenvy::dotenv().ok();

    let config = AppConfig::init()?;
    info!("Configuration loaded");

    if config.discord.token.is_empty() {
        error!("Discord token not configured!");
        error!("Set discord.token in config/local.toml or the PASSFORGE_DISCORD__TOKEN env var");
        return Err(anyhow::anyhow!("Discord token not configured"));
    }

    // The generator cannot function without a wordlist, so an unreadable or
    // empty source aborts startup before the gateway connects.
    let wordlist = Wordlist::load(
        &config.wordlist.path,
        config.wordlist.min_length,
        config.wordlist.max_length,
        |c| c.is_ascii_lowercase(),
    )?;
    info!(
        "Wordlist loaded: {} words from {}",
        wordlist.len(),
        config.wordlist.path
    );

    let admins = AdminRegistry::from_ids(config.admins.iter().copied());
    if admins.is_empty() {
        info!("No seed admins configured; feedback is dropped until /debug subscribes one");
    } else {
        info!("Seeded {} feedback admin(s)", admins.len());
    }

    bot::start_bot(Arc::new(wordlist), admins, &config.discord.token).await?;

    Ok(())
}
