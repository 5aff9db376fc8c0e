pub mod admin;
pub mod commands;
pub mod handler;
pub mod session;

use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, FullEvent, GatewayIntents};
use tracing::{error, info};

use crate::error::AppResult;
use crate::generator::Wordlist;
use admin::AdminRegistry;
use session::SessionMap;

/// Shared data accessible in all commands
#[derive(Debug)]
pub struct Data {
    pub wordlist: Arc<Wordlist>,
    pub admins: AdminRegistry,
    pub sessions: SessionMap,
}

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Event handler for Discord events
async fn event_handler(
    ctx: &serenity::Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!("Bot is ready! Logged in as {}", data_about_bot.user.name);
        }
        FullEvent::Message { new_message } => {
            handler::handle_message(ctx, new_message, data).await;
        }
        _ => {}
    }
    Ok(())
}

/// Create and configure the Discord bot framework
pub fn create_framework(
    wordlist: Arc<Wordlist>,
    admins: AdminRegistry,
) -> poise::Framework<Data, Error> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all_commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!("Command error: {}", error);
                            let _ = ctx.say(format!("An error occurred: {}", error)).await;
                        }
                        poise::FrameworkError::Setup { error, .. } => {
                            error!("Setup error: {}", error);
                        }
                        err => {
                            error!("Framework error: {:?}", err);
                        }
                    }
                })
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    "Registered {} slash commands globally",
                    framework.options().commands.len()
                );
                Ok(Data {
                    wordlist,
                    admins,
                    sessions: SessionMap::new(),
                })
            })
        })
        .build()
}

/// Start the Discord bot with the injected wordlist and seed admin set.
pub async fn start_bot(
    wordlist: Arc<Wordlist>,
    admins: AdminRegistry,
    token: &str,
) -> AppResult<()> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let framework = create_framework(wordlist, admins);

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord bot...");
    client.start().await?;

    Ok(())
}
