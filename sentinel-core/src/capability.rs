use poise::serenity_prelude as serenity;

/// A permission the moderation commands care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    KickMembers,
    BanMembers,
    ModerateMembers,
}

impl Capability {
    pub fn permission(self) -> serenity::Permissions {
        match self {
            Self::KickMembers => serenity::Permissions::KICK_MEMBERS,
            Self::BanMembers => serenity::Permissions::BAN_MEMBERS,
            Self::ModerateMembers => serenity::Permissions::MODERATE_MEMBERS,
        }
    }

    /// Name as shown in the Discord client settings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::KickMembers => "Kick Members",
            Self::BanMembers => "Ban Members",
            Self::ModerateMembers => "Moderate Members",
        }
    }
}

/// Effective permissions of a user in one guild.
///
/// `ADMINISTRATOR` implicitly grants every capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilitySet(serenity::Permissions);

impl Default for CapabilitySet {
    fn default() -> Self {
        Self::empty()
    }
}

impl CapabilitySet {
    pub fn empty() -> Self {
        Self(serenity::Permissions::empty())
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.0.contains(serenity::Permissions::ADMINISTRATOR)
            || self.0.contains(capability.permission())
    }

    pub fn is_administrator(&self) -> bool {
        self.0.contains(serenity::Permissions::ADMINISTRATOR)
    }
}

impl From<serenity::Permissions> for CapabilitySet {
    fn from(value: serenity::Permissions) -> Self {
        Self(value)
    }
}
