//! Checks every moderation command runs before touching the target.
//!
//! The order is fixed and the first failing check wins:
//!
//! 1. the invoker holds the action's capability
//! 2. the target is in the local member cache
//! 3. the target is neither the bot nor the invoker
//! 4. the bot holds the action's capability
//! 5. the bot outranks the target (and, for timeouts, the target is not an administrator)
//! 6. for timeouts, the target isn't already timed out

use poise::serenity_prelude as serenity;
use tracing::debug;

use crate::moderation::ModAction;
use crate::moderation::messages::{
    administrator_timeout_message, already_timed_out_message, bot_target_message,
    guild_only_message, missing_bot_permission_message, missing_invoker_permission_message,
    not_a_member_message, outranked_message, self_target_message, usage_message,
};
use sentinel_core::{Capability, Interaction, Platform, Reply, UserRef};
use sentinel_utils::time::is_after;

#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    GuildOnly,
    MissingInvokerPermission(Capability),
    MissingTarget { usage: &'static str },
    NotAMember,
    TargetIsBot,
    TargetIsInvoker,
    MissingBotPermission(Capability),
    Outranked { name: String },
    TargetIsAdministrator { name: String },
    AlreadyTimedOut { name: String, until: serenity::Timestamp },
}

impl Rejection {
    pub fn message(&self, action: ModAction) -> String {
        match self {
            Self::GuildOnly => guild_only_message().to_owned(),
            Self::MissingInvokerPermission(capability) => {
                missing_invoker_permission_message(*capability)
            }
            Self::MissingTarget { usage } => usage_message(usage),
            Self::NotAMember => not_a_member_message().to_owned(),
            Self::TargetIsBot => bot_target_message(action),
            Self::TargetIsInvoker => self_target_message(action),
            Self::MissingBotPermission(capability) => missing_bot_permission_message(*capability),
            Self::Outranked { name } => outranked_message(action, name),
            Self::TargetIsAdministrator { name } => administrator_timeout_message(name),
            Self::AlreadyTimedOut { name, until } => already_timed_out_message(name, *until),
        }
    }

    pub fn into_reply(self, action: ModAction) -> Reply {
        Reply::private(self.message(action))
    }
}

/// A moderation request that passed every check.
#[derive(Debug)]
pub struct Approved<'a> {
    pub guild_id: serenity::GuildId,
    pub target: &'a UserRef,
}

pub fn approve<'a, P: Platform>(
    platform: &P,
    action: ModAction,
    usage: &'static str,
    interaction: &'a Interaction,
    now_unix: i64,
) -> Result<Approved<'a>, Rejection> {
    let result = evaluate(platform, action, usage, interaction, now_unix);
    if let Err(rejection) = &result {
        debug!(
            command = %interaction.command,
            invoker = interaction.invoker.id.get(),
            ?rejection,
            "moderation request rejected"
        );
    }
    result
}

fn evaluate<'a, P: Platform>(
    platform: &P,
    action: ModAction,
    usage: &'static str,
    interaction: &'a Interaction,
    now_unix: i64,
) -> Result<Approved<'a>, Rejection> {
    let Some(guild_id) = interaction.guild_id else {
        return Err(Rejection::GuildOnly);
    };

    let capability = action.capability();
    if !interaction.invoker_capabilities.has(capability) {
        return Err(Rejection::MissingInvokerPermission(capability));
    }

    let Some(target) = interaction.user_option("target") else {
        return Err(Rejection::MissingTarget { usage });
    };

    let Some(member) = platform.cached_member(guild_id, target.id) else {
        return Err(Rejection::NotAMember);
    };

    if target.id == platform.bot_user_id() {
        return Err(Rejection::TargetIsBot);
    }

    if target.id == interaction.invoker.id {
        return Err(Rejection::TargetIsInvoker);
    }

    if !platform.bot_capabilities(guild_id).has(capability) {
        return Err(Rejection::MissingBotPermission(capability));
    }

    if !member.manageable {
        return Err(Rejection::Outranked {
            name: target.name.clone(),
        });
    }

    if action == ModAction::Timeout {
        if member.is_administrator {
            return Err(Rejection::TargetIsAdministrator {
                name: target.name.clone(),
            });
        }

        if let Some(until) = member.timed_out_until
            && is_after(until, now_unix)
        {
            return Err(Rejection::AlreadyTimedOut {
                name: target.name.clone(),
                until,
            });
        }
    }

    Ok(Approved { guild_id, target })
}
