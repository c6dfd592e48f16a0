use crate::{Context, Error};
use tracing::debug;

pub fn rejection_message(channel_id: u64) -> String {
    format!(
        "❌ This command cannot be used in <#{}> (ID: {})",
        channel_id, channel_id
    )
}

/// Lets a command run only in the configured channels; everywhere if none are.
pub async fn allowed_channel(ctx: Context<'_>) -> Result<bool, Error> {
    let channel_id = ctx.channel_id().get();
    if ctx.data().config.channel_allowed(channel_id) {
        return Ok(true);
    }

    debug!(
        "Rejected {} from {} in channel {}",
        ctx.command().qualified_name,
        ctx.author().tag(),
        channel_id
    );
    ctx.say(rejection_message(channel_id)).await?;
    Ok(false)
}
