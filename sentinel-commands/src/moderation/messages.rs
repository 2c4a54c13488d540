use poise::serenity_prelude as serenity;

use crate::moderation::ModAction;
use sentinel_core::Capability;
use sentinel_utils::formatting::{
    discord_relative_timestamp, discord_timestamp, neutralize_mentions,
};

pub fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn missing_invoker_permission_message(capability: Capability) -> String {
    format!(
        "🛑 You need the \"{}\" permission to use this command.",
        capability.display_name()
    )
}

pub fn not_a_member_message() -> &'static str {
    "User is not a member of this server."
}

pub fn bot_target_message(action: ModAction) -> String {
    format!("❌ You can't {} me.", action.verb())
}

pub fn self_target_message(action: ModAction) -> String {
    format!("❌ You can't {} yourself.", action.verb())
}

pub fn missing_bot_permission_message(capability: Capability) -> String {
    format!(
        "❌ I do not have the \"{}\" permission to perform this action.",
        capability.display_name()
    )
}

pub fn outranked_message(action: ModAction, name: &str) -> String {
    format!(
        "❌ I cannot {} {}. They might have a higher role or be the server owner.",
        action.verb(),
        name
    )
}

pub fn administrator_timeout_message(name: &str) -> String {
    format!("❌ I cannot timeout {name}. Administrators can't be timed out.")
}

pub fn already_timed_out_message(name: &str, until: serenity::Timestamp) -> String {
    let until = until.unix_timestamp();
    format!(
        "⏳ {} is already timed out until {} ({}).",
        name,
        discord_timestamp(until),
        discord_relative_timestamp(until)
    )
}

pub fn action_success_message(action: ModAction, name: &str, reason: &str) -> String {
    format!(
        "✅ Successfully {} **{}**. Reason: *{}*",
        action.past_tense(),
        name,
        neutralize_mentions(reason)
    )
}

pub fn timeout_success_message(name: &str, duration_label: &str, reason: &str) -> String {
    format!(
        "✅ Successfully timed out **{}** for **{}**. Reason: *{}*",
        name,
        duration_label,
        neutralize_mentions(reason)
    )
}
