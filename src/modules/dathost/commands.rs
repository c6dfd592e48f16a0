use super::actions::{perform, Action};
use super::client::HostingClient;
use super::format;
use super::resolver::{resolve, Resolution};
use crate::modules::system::checks::allowed_channel;
use crate::{Context, Error};
use poise::command;
use tracing::{debug, info};

/// Listing of every server on the account.
pub async fn servers_reply(client: &dyn HostingClient) -> Vec<String> {
    match client.list_servers().await {
        Ok(servers) => format::listing(&servers),
        Err(e) => vec![format::transport_failure("fetching servers", &e)],
    }
}

/// Servers that are currently on, with their connection details.
pub async fn status_reply(client: &dyn HostingClient) -> Vec<String> {
    match client.list_servers().await {
        Ok(servers) => format::status(&servers),
        Err(e) => vec![format::transport_failure("fetching server status", &e)],
    }
}

/// Resolves `query` against a fresh listing and applies `action` to the one
/// server it names.
pub async fn action_reply(client: &dyn HostingClient, query: &str, action: Action) -> Vec<String> {
    if query.trim().is_empty() {
        return vec![format!(
            "❌ Please name the server to {}, e.g. `{} retake`",
            action, action
        )];
    }

    let servers = match client.list_servers().await {
        Ok(servers) => servers,
        Err(e) => {
            let doing = format!("{} server", action.progressive());
            return vec![format::transport_failure(&doing, &e)];
        }
    };

    match resolve(servers, query) {
        Resolution::NotFound => vec![format::not_found(query)],
        Resolution::Ambiguous(candidates) => {
            debug!("{:?} matched {} servers", query, candidates.len());
            format::ambiguous(&candidates)
        }
        Resolution::Resolved(server) => {
            info!("Requesting {} of {} ({})", action, server.name, server.id);
            let outcome = perform(client, server, action).await;
            vec![format::action_report(&outcome)]
        }
    }
}

async fn send_chunks(ctx: Context<'_>, chunks: Vec<String>) -> Result<(), Error> {
    for chunk in chunks {
        ctx.say(chunk).await?;
    }
    Ok(())
}

/// List all servers in the Dathost account
#[command(prefix_command, slash_command, check = "allowed_channel", category = "Servers")]
pub async fn servers(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;
    let chunks = servers_reply(ctx.data().dathost.as_ref()).await;
    send_chunks(ctx, chunks).await
}

/// Show all running servers and their connection details
#[command(prefix_command, slash_command, check = "allowed_channel", category = "Servers")]
pub async fn status(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;
    let chunks = status_reply(ctx.data().dathost.as_ref()).await;
    send_chunks(ctx, chunks).await
}

/// Start a server by name
#[command(prefix_command, slash_command, check = "allowed_channel", category = "Servers")]
pub async fn start(
    ctx: Context<'_>,
    #[description = "Server name, or a unique part of it"]
    #[rest]
    name: Option<String>,
) -> Result<(), Error> {
    ctx.defer().await?;
    let chunks = action_reply(
        ctx.data().dathost.as_ref(),
        &name.unwrap_or_default(),
        Action::Start,
    )
    .await;
    send_chunks(ctx, chunks).await
}

/// Stop a server by name
#[command(prefix_command, slash_command, check = "allowed_channel", category = "Servers")]
pub async fn stop(
    ctx: Context<'_>,
    #[description = "Server name, or a unique part of it"]
    #[rest]
    name: Option<String>,
) -> Result<(), Error> {
    ctx.defer().await?;
    let chunks = action_reply(
        ctx.data().dathost.as_ref(),
        &name.unwrap_or_default(),
        Action::Stop,
    )
    .await;
    send_chunks(ctx, chunks).await
}

/// Restart a server by name
#[command(prefix_command, slash_command, check = "allowed_channel", category = "Servers")]
pub async fn restart(
    ctx: Context<'_>,
    #[description = "Server name, or a unique part of it"]
    #[rest]
    name: Option<String>,
) -> Result<(), Error> {
    ctx.defer().await?;
    let chunks = action_reply(
        ctx.data().dathost.as_ref(),
        &name.unwrap_or_default(),
        Action::Restart,
    )
    .await;
    send_chunks(ctx, chunks).await
}
