pub mod client;
pub mod dispatch;
mod invocation;
pub mod moderation;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

use sentinel_core::{Data, Error};

pub use dispatch::dispatch;

/// Every slash command the bot registers, in registration order.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::hello::hello(),
        utility::motivate::motivate(),
        moderation::kick::kick(),
        moderation::ban::ban(),
        moderation::timeout::timeout(),
    ]
}

/// Handler selected for an incoming command name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Ping,
    Hello,
    Motivate,
    Kick,
    Ban,
    Timeout,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        Self::Ping,
        Self::Hello,
        Self::Motivate,
        Self::Kick,
        Self::Ban,
        Self::Timeout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Hello => "hello",
            Self::Motivate => "motivate",
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Timeout => "timeout",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}
