use poise::serenity_prelude as serenity;
use tracing::info;

use crate::invocation::{invoke, number_option, string_option, user_option};
use crate::moderation::guard::approve;
use crate::moderation::messages::{timeout_success_message, usage_message};
use crate::moderation::{DEFAULT_REASON, ModAction};
use sentinel_core::{Context, Error, Interaction, Platform, Reply};
use sentinel_utils::formatting::format_minutes;
use sentinel_utils::time::unix_now;

const USAGE: &str = "/timeout <target> <duration_minutes> [reason]";

/// Discord refuses timeouts longer than 28 days.
pub const MAX_TIMEOUT_MINUTES: f64 = 40_320.0;
pub const MIN_TIMEOUT_MINUTES: f64 = 1.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Timeouts a user for a specific duration (max 28 days).
#[poise::command(
    slash_command,
    category = "Moderation",
    default_member_permissions = "MODERATE_MEMBERS"
)]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "The member to timeout."] target: serenity::User,
    #[description = "Duration of the timeout in minutes."]
    #[min = 1]
    duration_minutes: f64,
    #[description = "Reason for the timeout."] reason: Option<String>,
) -> Result<(), Error> {
    invoke(
        ctx,
        vec![
            user_option("target", &target),
            number_option("duration_minutes", duration_minutes),
            string_option("reason", reason),
        ],
    )
    .await
}

/// Requested minutes to the applied duration in milliseconds, capped at 28 days.
pub fn timeout_duration_ms(minutes: f64) -> u64 {
    (minutes.min(MAX_TIMEOUT_MINUTES) * MILLIS_PER_MINUTE) as u64
}

/// Label shown in the success reply. Below the cap it echoes the requested
/// value rather than the applied one.
pub fn timeout_duration_label(minutes: f64) -> String {
    if minutes >= MAX_TIMEOUT_MINUTES {
        "28 days (max allowed)".to_owned()
    } else {
        format_minutes(minutes)
    }
}

pub fn invalid_duration_message() -> String {
    format!(
        "Invalid duration. The timeout must last at least {} minute.",
        MIN_TIMEOUT_MINUTES
    )
}

pub async fn run_timeout<P: Platform>(
    platform: &P,
    interaction: &Interaction,
) -> Result<Reply, Error> {
    let now = unix_now();
    let approved = match approve(platform, ModAction::Timeout, USAGE, interaction, now) {
        Ok(approved) => approved,
        Err(rejection) => return Ok(rejection.into_reply(ModAction::Timeout)),
    };

    let Some(minutes) = interaction.number_option("duration_minutes") else {
        return Ok(Reply::private(usage_message(USAGE)));
    };

    if !minutes.is_finite() || minutes < MIN_TIMEOUT_MINUTES {
        return Ok(Reply::private(invalid_duration_message()));
    }

    let duration_ms = timeout_duration_ms(minutes);
    let until = serenity::Timestamp::from_unix_timestamp(now + (duration_ms / 1_000) as i64)?;
    let reason = interaction.string_option("reason").unwrap_or(DEFAULT_REASON);

    platform
        .timeout_member(approved.guild_id, approved.target.id, until, reason)
        .await?;

    info!(
        guild_id = approved.guild_id.get(),
        target = approved.target.id.get(),
        moderator = interaction.invoker.id.get(),
        duration_ms,
        "member timed out"
    );

    Ok(Reply::public(timeout_success_message(
        &approved.target.name,
        &timeout_duration_label(minutes),
        reason,
    )))
}
