use poise::serenity_prelude::{Context, Message};
use tracing::{error, info};

use crate::bot::{admin, Data};
use crate::generator::{self, Strength};
use crate::locale;

/// Actions reachable through the plain-text menu phrases.
enum MenuAction {
    Generate(Strength),
    Feedback,
    Cancel,
}

impl MenuAction {
    fn parse(text: &str) -> Option<Self> {
        match text {
            locale::MENU_WEAK => Some(Self::Generate(Strength::Weak)),
            locale::MENU_NORMAL => Some(Self::Generate(Strength::Normal)),
            locale::MENU_STRONG => Some(Self::Generate(Strength::Strong)),
            locale::MENU_STRONGER => Some(Self::Generate(Strength::Stronger)),
            locale::MENU_INSANE => Some(Self::Generate(Strength::Insane)),
            locale::MENU_FEEDBACK => Some(Self::Feedback),
            locale::MENU_CANCEL => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Handle a plain chat message: feedback intake first, then menu phrases.
///
/// Channels are shared on Discord, so chatter that is neither a menu phrase
/// nor a pending feedback body is ignored instead of answered.
pub async fn handle_message(ctx: &Context, msg: &Message, data: &Data) {
    // Ignore bot messages
    if msg.author.bot {
        return;
    }

    let content = msg.content.trim();
    if content.is_empty() {
        return;
    }

    let chat = msg.channel_id;

    // In a collecting chat any text short of Cancel is the feedback body.
    if data.sessions.is_awaiting_feedback(chat) {
        if content == locale::MENU_CANCEL {
            data.sessions.end_feedback(chat);
            reply(ctx, msg, locale::CANCELLED).await;
            return;
        }

        admin::relay_feedback(&ctx.http, &data.admins, &msg.author.name, content).await;
        data.sessions.end_feedback(chat);
        info!("Relayed feedback from {} to {} admin(s)", msg.author.name, data.admins.len());
        reply(ctx, msg, locale::FEEDBACK_DONE).await;
        return;
    }

    let Some(action) = MenuAction::parse(content) else {
        return;
    };

    if data.sessions.state(chat).is_none() {
        reply(ctx, msg, locale::NOT_STARTED).await;
        return;
    }

    match action {
        MenuAction::Generate(strength) => {
            let generated = {
                let mut rng = rand::thread_rng();
                generator::generate(&data.wordlist, strength, &mut rng)
            };
            match generated {
                Ok(passphrase) => {
                    info!("Generated {} passphrase for {}", strength.label(), msg.author.name);
                    reply(ctx, msg, &passphrase).await;
                }
                Err(e) => error!("Passphrase generation failed: {}", e),
            }
        }
        MenuAction::Feedback => {
            data.sessions.begin_feedback(chat);
            reply(ctx, msg, locale::ASK_FEEDBACK).await;
        }
        MenuAction::Cancel => {
            reply(ctx, msg, locale::CANCELLED).await;
        }
    }
}

async fn reply(ctx: &Context, msg: &Message, text: &str) {
    if let Err(e) = msg.channel_id.say(&ctx.http, text).await {
        error!("Failed to send reply: {}", e);
    }
}
