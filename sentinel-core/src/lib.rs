/// Capability sets checked before moderation actions.
pub mod capability;
/// Platform-neutral view of one command invocation.
pub mod interaction;
/// Seams between command logic and the Discord client.
pub mod platform;

pub use capability::{Capability, CapabilitySet};
pub use interaction::{Interaction, OptionValue, Reply, UserRef, Visibility};
pub use platform::{MemberView, Platform, Responder};

pub type Error = anyhow::Error;

#[derive(Clone, Debug, Default)]
pub struct Data;

pub type Context<'a> = poise::Context<'a, Data, Error>;
