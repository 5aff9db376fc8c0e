use crate::bot::Data;
use crate::locale;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Start collecting a feedback message for the maintainers
#[poise::command(slash_command)]
pub async fn feedback(ctx: Context<'_>) -> Result<(), Error> {
    if !ctx.data().sessions.begin_feedback(ctx.channel_id()) {
        ctx.say(locale::NOT_STARTED).await?;
        return Ok(());
    }
    ctx.say(locale::ASK_FEEDBACK).await?;
    Ok(())
}

/// Leave feedback mode without sending anything
#[poise::command(slash_command)]
pub async fn cancel(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().sessions.end_feedback(ctx.channel_id());
    ctx.say(locale::CANCELLED).await?;
    Ok(())
}
