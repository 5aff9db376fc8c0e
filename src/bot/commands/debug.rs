use tracing::info;

use crate::bot::Data;
use crate::locale;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

// Neither command checks permissions; any account can toggle itself into the
// relay set.

/// Subscribe the invoking account to relayed feedback
#[poise::command(slash_command)]
pub async fn debug(ctx: Context<'_>) -> Result<(), Error> {
    let admins = &ctx.data().admins;
    admins.subscribe(ctx.author().id);
    info!("Admin set now has {} member(s)", admins.len());
    ctx.say(locale::DEBUG_ENABLED).await?;
    Ok(())
}

/// Unsubscribe the invoking account from relayed feedback
#[poise::command(slash_command)]
pub async fn cancel_debug(ctx: Context<'_>) -> Result<(), Error> {
    // Silent when the account was not subscribed.
    if ctx.data().admins.unsubscribe(ctx.author().id) {
        ctx.say(locale::DEBUG_DISABLED).await?;
    }
    Ok(())
}
