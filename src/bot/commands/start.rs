use crate::bot::Data;
use crate::locale;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Open the passphrase menu in this chat
#[poise::command(slash_command)]
pub async fn start(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().sessions.start(ctx.channel_id());
    ctx.say(locale::WELCOME_MESSAGE).await?;
    Ok(())
}
