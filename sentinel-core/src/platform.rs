use std::future::Future;

use poise::serenity_prelude as serenity;

use crate::Error;
use crate::capability::CapabilitySet;
use crate::interaction::Reply;

/// A guild member as seen in the bot's local member cache.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberView {
    pub user_id: serenity::UserId,
    pub name: String,
    /// The bot's role hierarchy outranks this member.
    pub manageable: bool,
    pub is_administrator: bool,
    pub timed_out_until: Option<serenity::Timestamp>,
}

/// Discord operations the command handlers need.
///
/// Reads come from the local cache and never hit the network. Mutations are
/// issued once and never retried.
pub trait Platform: Sync {
    fn bot_user_id(&self) -> serenity::UserId;

    fn bot_capabilities(&self, guild_id: serenity::GuildId) -> CapabilitySet;

    fn cached_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
    ) -> Option<MemberView>;

    fn kick_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn ban_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn timeout_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        until: serenity::Timestamp,
        reason: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Sends the single reply an interaction is allowed.
pub trait Responder: Sync {
    /// True once a reply was sent or is in flight.
    fn has_responded(&self) -> bool;

    fn respond(&self, reply: Reply) -> impl Future<Output = Result<(), Error>> + Send;
}
