use super::client::HostingClient;
use super::models::ServerRecord;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Restart,
}

impl Action {
    pub fn past_tense(self) -> &'static str {
        match self {
            Action::Start => "started",
            Action::Stop => "stopped",
            Action::Restart => "restarted",
        }
    }

    pub fn progressive(self) -> &'static str {
        match self {
            Action::Start => "starting",
            Action::Stop => "stopping",
            Action::Restart => "restarting",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: Action,
    pub server: ServerRecord,
    pub succeeded: bool,
    /// Transport error of the action itself, or of the post-start re-fetch
    /// when `succeeded` is true.
    pub error: Option<String>,
}

/// Applies `action` to `server` and reports what happened.
///
/// A successful start re-fetches the record, since the domain and port may
/// only be populated once the instance is on.
pub async fn perform(
    client: &dyn HostingClient,
    server: ServerRecord,
    action: Action,
) -> ActionOutcome {
    let result = match action {
        Action::Start => client.start(&server.id).await,
        Action::Stop => client.stop(&server.id).await,
        Action::Restart => client.restart(&server.id).await,
    };

    let accepted = match result {
        Ok(accepted) => accepted,
        Err(e) => {
            warn!("Failed to {} server {}: {}", action, server.name, e);
            return ActionOutcome {
                action,
                server,
                succeeded: false,
                error: Some(e.to_string()),
            };
        }
    };

    if !accepted {
        warn!("Dathost refused to {} server {}", action, server.name);
        return ActionOutcome {
            action,
            server,
            succeeded: false,
            error: None,
        };
    }

    info!("Server {} ({}) {}", server.name, server.id, action.past_tense());

    if action != Action::Start {
        return ActionOutcome {
            action,
            server,
            succeeded: true,
            error: None,
        };
    }

    match client.get_server(&server.id).await {
        Ok(refreshed) => ActionOutcome {
            action,
            server: refreshed,
            succeeded: true,
            error: None,
        },
        Err(e) => {
            warn!("Started {} but could not refresh it: {}", server.name, e);
            ActionOutcome {
                action,
                server,
                succeeded: true,
                error: Some(e.to_string()),
            }
        }
    }
}
