use crate::Error;
use poise::serenity_prelude::{ActivityData, Context, FullEvent, OnlineStatus};
use tracing::info;

pub async fn handle_event(ctx: &Context, event: &FullEvent) -> Result<(), Error> {
    if let FullEvent::Ready { data_about_bot } = event {
        info!("{} has connected to Discord", data_about_bot.user.tag());
        ctx.set_presence(
            Some(ActivityData::watching("over the game servers")),
            OnlineStatus::Online,
        );
    }
    Ok(())
}
