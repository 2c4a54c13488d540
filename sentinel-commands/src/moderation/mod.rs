pub mod ban;
pub mod guard;
pub mod kick;
pub(crate) mod messages;
pub mod timeout;

use sentinel_core::Capability;

pub const DEFAULT_REASON: &str = "No reason provided.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModAction {
    Kick,
    Ban,
    Timeout,
}

impl ModAction {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Timeout => "timeout",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Kick => "kicked",
            Self::Ban => "banned",
            Self::Timeout => "timed out",
        }
    }

    /// Held by both the invoker and the bot before the action runs.
    pub fn capability(self) -> Capability {
        match self {
            Self::Kick => Capability::KickMembers,
            Self::Ban => Capability::BanMembers,
            Self::Timeout => Capability::ModerateMembers,
        }
    }
}
