use poise::serenity_prelude as serenity;
use tracing::info;

use crate::invocation::{invoke, string_option, user_option};
use crate::moderation::guard::approve;
use crate::moderation::messages::action_success_message;
use crate::moderation::{DEFAULT_REASON, ModAction};
use sentinel_core::{Context, Error, Interaction, Platform, Reply};
use sentinel_utils::time::unix_now;

const USAGE: &str = "/ban <target> [reason]";

/// Bans a specified user from the server.
#[poise::command(
    slash_command,
    category = "Moderation",
    default_member_permissions = "BAN_MEMBERS"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The user to ban."] target: serenity::User,
    #[description = "Reason for the ban."] reason: Option<String>,
) -> Result<(), Error> {
    invoke(
        ctx,
        vec![user_option("target", &target), string_option("reason", reason)],
    )
    .await
}

pub async fn run_ban<P: Platform>(platform: &P, interaction: &Interaction) -> Result<Reply, Error> {
    let approved = match approve(platform, ModAction::Ban, USAGE, interaction, unix_now()) {
        Ok(approved) => approved,
        Err(rejection) => return Ok(rejection.into_reply(ModAction::Ban)),
    };

    let reason = interaction.string_option("reason").unwrap_or(DEFAULT_REASON);
    platform
        .ban_member(approved.guild_id, approved.target.id, reason)
        .await?;

    info!(
        guild_id = approved.guild_id.get(),
        target = approved.target.id.get(),
        moderator = interaction.invoker.id.get(),
        "member banned"
    );

    Ok(Reply::public(action_success_message(
        ModAction::Ban,
        &approved.target.name,
        reason,
    )))
}
