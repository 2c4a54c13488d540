use tracing::{debug, error};

use crate::CommandKind;
use crate::moderation;
use crate::utility;
use sentinel_core::{Error, Interaction, Platform, Reply, Responder};

pub fn unexpected_error_message() -> &'static str {
    "An unexpected error occurred while executing this command!"
}

pub fn unknown_command_message() -> &'static str {
    "That command is not available."
}

/// Handle one command invocation, sending exactly one reply.
pub async fn dispatch<P, R>(platform: &P, responder: &R, interaction: &Interaction)
where
    P: Platform,
    R: Responder,
{
    let command = interaction.command.as_str();
    let outcome = match CommandKind::from_name(command) {
        Some(kind) => run(kind, platform, interaction).await,
        None => {
            debug!(command, "unknown command invocation");
            Ok(Reply::private(unknown_command_message()))
        }
    };

    match outcome {
        Ok(reply) => {
            if let Err(source) = responder.respond(reply).await {
                error!(?source, command, "failed to send interaction reply");
            }
        }
        Err(source) => {
            error!(?source, command, "command error");

            if responder.has_responded() {
                return;
            }

            if let Err(source) = responder
                .respond(Reply::private(unexpected_error_message()))
                .await
            {
                error!(?source, command, "failed to send error reply");
            }
        }
    }
}

async fn run<P: Platform>(
    kind: CommandKind,
    platform: &P,
    interaction: &Interaction,
) -> Result<Reply, Error> {
    match kind {
        CommandKind::Ping => Ok(utility::ping::ping_reply()),
        CommandKind::Hello => Ok(utility::hello::hello_reply(interaction)),
        CommandKind::Motivate => Ok(utility::motivate::motivate_reply(interaction)),
        CommandKind::Kick => moderation::kick::run_kick(platform, interaction).await,
        CommandKind::Ban => moderation::ban::run_ban(platform, interaction).await,
        CommandKind::Timeout => moderation::timeout::run_timeout(platform, interaction).await,
    }
}
