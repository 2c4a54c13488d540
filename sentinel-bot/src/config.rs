use std::env;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;

/// Startup settings read from the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub application_id: serenity::ApplicationId,
    /// Register commands in this guild only, instead of globally.
    pub dev_guild_id: Option<serenity::GuildId>,
    pub register_commands: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = required(&lookup, "BOT_TOKEN")?;
        let application_id = serenity::ApplicationId::new(parse_id(
            "CLIENT_ID",
            &required(&lookup, "CLIENT_ID")?,
        )?);

        let dev_guild_id = match lookup("DISCORD_GUILD_ID").filter(|value| !value.trim().is_empty())
        {
            Some(raw) => Some(serenity::GuildId::new(parse_id("DISCORD_GUILD_ID", &raw)?)),
            None => None,
        };

        Ok(Self {
            token,
            application_id,
            dev_guild_id,
            register_commands: parse_bool(lookup("REGISTER_COMMANDS"), true),
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .with_context(|| format!("{key} must be set"))
}

fn parse_id(key: &str, raw: &str) -> anyhow::Result<u64> {
    let id = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a numeric Discord id"))?;
    anyhow::ensure!(id != 0, "{key} must not be zero");
    Ok(id)
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    match value {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}
