use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use poise::serenity_prelude as serenity;

use sentinel_core::{CapabilitySet, Context, Error, MemberView, Platform, Reply, Responder};
use sentinel_utils::permissions::{Rank, outranks, resolve_member_permissions};

/// Platform client backed by serenity's cache and HTTP client.
pub struct SerenityPlatform {
    cache: Arc<serenity::Cache>,
    http: Arc<serenity::Http>,
    /// The bot's permissions as reported with the interaction, if any.
    app_permissions: Option<serenity::Permissions>,
}

impl SerenityPlatform {
    pub fn new(ctx: &serenity::Context, app_permissions: Option<serenity::Permissions>) -> Self {
        Self {
            cache: ctx.cache.clone(),
            http: ctx.http.clone(),
            app_permissions,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct RoleInfo {
    pub position: u16,
    pub permissions: serenity::Permissions,
}

/// The parts of a cached guild that decide who may act on whom.
#[derive(Clone, Debug)]
pub(crate) struct GuildRoles {
    pub guild_id: serenity::GuildId,
    pub owner_id: serenity::UserId,
    pub roles: HashMap<serenity::RoleId, RoleInfo>,
}

impl GuildRoles {
    fn from_guild(guild: &serenity::Guild) -> Self {
        Self {
            guild_id: guild.id,
            owner_id: guild.owner_id,
            roles: guild
                .roles
                .iter()
                .map(|(id, role)| {
                    (
                        *id,
                        RoleInfo {
                            position: role.position,
                            permissions: role.permissions,
                        },
                    )
                })
                .collect(),
        }
    }

    fn member_roles(&self, member: &CachedMember<'_>) -> impl Iterator<Item = RoleInfo> {
        member
            .roles
            .iter()
            .filter_map(|role_id| self.roles.get(role_id).copied())
    }

    fn rank(&self, member: &CachedMember<'_>) -> Rank {
        Rank::new(
            self.owner_id == member.user_id,
            self.member_roles(member).map(|role| role.position),
        )
    }

    fn permissions(&self, member: &CachedMember<'_>) -> serenity::Permissions {
        // The @everyone role shares the guild's id.
        let everyone = self
            .roles
            .get(&serenity::RoleId::new(self.guild_id.get()))
            .map_or(serenity::Permissions::empty(), |role| role.permissions);

        resolve_member_permissions(
            self.owner_id == member.user_id,
            everyone,
            self.member_roles(member).map(|role| role.permissions),
        )
    }
}

#[derive(Clone, Debug)]
pub(crate) struct CachedMember<'a> {
    pub user_id: serenity::UserId,
    pub name: &'a str,
    pub roles: &'a [serenity::RoleId],
    pub timed_out_until: Option<serenity::Timestamp>,
}

impl<'a> CachedMember<'a> {
    fn from_member(member: &'a serenity::Member) -> Self {
        Self {
            user_id: member.user.id,
            name: &member.user.name,
            roles: &member.roles,
            timed_out_until: member.communication_disabled_until,
        }
    }
}

/// Judge `target` from the bot's point of view. A bot missing from the cache
/// can't manage anyone.
pub(crate) fn member_view(
    guild: &GuildRoles,
    bot: Option<&CachedMember<'_>>,
    target: &CachedMember<'_>,
) -> MemberView {
    let manageable = bot.is_some_and(|bot| {
        bot.user_id != target.user_id && outranks(guild.rank(bot), guild.rank(target))
    });

    MemberView {
        user_id: target.user_id,
        name: target.name.to_owned(),
        manageable,
        is_administrator: CapabilitySet::from(guild.permissions(target)).is_administrator(),
        timed_out_until: target.timed_out_until,
    }
}

pub(crate) fn bot_capabilities(
    guild: &GuildRoles,
    bot: Option<&CachedMember<'_>>,
) -> CapabilitySet {
    bot.map_or(CapabilitySet::empty(), |bot| {
        CapabilitySet::from(guild.permissions(bot))
    })
}

impl Platform for SerenityPlatform {
    fn bot_user_id(&self) -> serenity::UserId {
        self.cache.current_user().id
    }

    fn bot_capabilities(&self, guild_id: serenity::GuildId) -> CapabilitySet {
        if let Some(permissions) = self.app_permissions {
            return CapabilitySet::from(permissions);
        }

        let bot_id = self.bot_user_id();
        let Some(guild) = self.cache.guild(guild_id) else {
            return CapabilitySet::empty();
        };
        let bot = guild.members.get(&bot_id).map(CachedMember::from_member);

        bot_capabilities(&GuildRoles::from_guild(&guild), bot.as_ref())
    }

    fn cached_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
    ) -> Option<MemberView> {
        let bot_id = self.bot_user_id();
        let guild = self.cache.guild(guild_id)?;
        let target = guild.members.get(&user_id).map(CachedMember::from_member)?;
        let bot = guild.members.get(&bot_id).map(CachedMember::from_member);

        Some(member_view(
            &GuildRoles::from_guild(&guild),
            bot.as_ref(),
            &target,
        ))
    }

    async fn kick_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        guild_id.kick_with_reason(&*self.http, user_id, reason).await?;
        Ok(())
    }

    async fn ban_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        guild_id.ban_with_reason(&*self.http, user_id, 0, reason).await?;
        Ok(())
    }

    async fn timeout_member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        until: serenity::Timestamp,
        reason: &str,
    ) -> Result<(), Error> {
        let edit = serenity::EditMember::new()
            .disable_communication_until_datetime(until)
            .audit_log_reason(reason);
        guild_id.edit_member(&*self.http, user_id, edit).await?;
        Ok(())
    }
}

/// Replies through the poise context at most once.
pub struct ContextResponder<'a> {
    ctx: Context<'a>,
    responded: AtomicBool,
}

impl<'a> ContextResponder<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self {
            ctx,
            responded: AtomicBool::new(false),
        }
    }
}

impl Responder for ContextResponder<'_> {
    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::Acquire)
    }

    async fn respond(&self, reply: Reply) -> Result<(), Error> {
        // Marked before sending so an in-flight reply also counts.
        if self.responded.swap(true, Ordering::AcqRel) {
            anyhow::bail!("{} was already answered", self.ctx.command().name);
        }

        let ephemeral = reply.is_ephemeral();
        self.ctx
            .send(
                poise::CreateReply::default()
                    .content(reply.content)
                    .ephemeral(ephemeral),
            )
            .await?;
        Ok(())
    }
}
