use poise::serenity_prelude as serenity;
use tracing::info;

use crate::invocation::{invoke, string_option, user_option};
use crate::moderation::guard::approve;
use crate::moderation::messages::action_success_message;
use crate::moderation::{DEFAULT_REASON, ModAction};
use sentinel_core::{Context, Error, Interaction, Platform, Reply};
use sentinel_utils::time::unix_now;

const USAGE: &str = "/kick <target> [reason]";

/// Kicks a specified user from the server.
#[poise::command(
    slash_command,
    category = "Moderation",
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick."] target: serenity::User,
    #[description = "Reason for the kick."] reason: Option<String>,
) -> Result<(), Error> {
    invoke(
        ctx,
        vec![user_option("target", &target), string_option("reason", reason)],
    )
    .await
}

pub async fn run_kick<P: Platform>(
    platform: &P,
    interaction: &Interaction,
) -> Result<Reply, Error> {
    let approved = match approve(platform, ModAction::Kick, USAGE, interaction, unix_now()) {
        Ok(approved) => approved,
        Err(rejection) => return Ok(rejection.into_reply(ModAction::Kick)),
    };

    let reason = interaction.string_option("reason").unwrap_or(DEFAULT_REASON);
    platform
        .kick_member(approved.guild_id, approved.target.id, reason)
        .await?;

    info!(
        guild_id = approved.guild_id.get(),
        target = approved.target.id.get(),
        moderator = interaction.invoker.id.get(),
        "member kicked"
    );

    Ok(Reply::public(action_success_message(
        ModAction::Kick,
        &approved.target.name,
        reason,
    )))
}
