use crate::{Context, Error};
use poise::command;

/// Check that the bot is alive
#[command(prefix_command, slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(format!("Pong! Latency: {}ms", latency.as_millis()))
        .await?;
    Ok(())
}
