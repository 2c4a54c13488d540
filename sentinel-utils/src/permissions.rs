use poise::serenity_prelude as serenity;

/// Union the `@everyone` permissions with those of every role the member holds.
///
/// The guild owner always resolves to every permission.
pub fn resolve_member_permissions(
    is_owner: bool,
    everyone: serenity::Permissions,
    member_roles: impl IntoIterator<Item = serenity::Permissions>,
) -> serenity::Permissions {
    if is_owner {
        return serenity::Permissions::all();
    }

    member_roles
        .into_iter()
        .fold(everyone, |resolved, role| resolved | role)
}

/// Where a member sits in a guild's role hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rank {
    pub is_owner: bool,
    /// Position of the member's highest role; `@everyone` is 0.
    pub top_role_position: u16,
}

impl Rank {
    pub fn new(is_owner: bool, role_positions: impl IntoIterator<Item = u16>) -> Self {
        Self {
            is_owner,
            top_role_position: role_positions.into_iter().max().unwrap_or(0),
        }
    }
}

/// Whether `actor` may act on `target`: nobody outranks the owner, the owner
/// outranks everyone else, and otherwise the top role must be strictly higher.
pub fn outranks(actor: Rank, target: Rank) -> bool {
    if target.is_owner {
        return false;
    }

    actor.is_owner || actor.top_role_position > target.top_role_position
}

#[cfg(test)]
mod tests {
    use super::{Rank, outranks, resolve_member_permissions};
    use poise::serenity_prelude as serenity;

    #[test]
    fn owner_resolves_to_everything() {
        let perms = resolve_member_permissions(true, serenity::Permissions::empty(), []);
        assert_eq!(perms, serenity::Permissions::all());
    }

    #[test]
    fn member_permissions_union_roles() {
        let perms = resolve_member_permissions(
            false,
            serenity::Permissions::SEND_MESSAGES,
            [
                serenity::Permissions::KICK_MEMBERS,
                serenity::Permissions::BAN_MEMBERS,
            ],
        );
        assert!(perms.contains(serenity::Permissions::SEND_MESSAGES));
        assert!(perms.contains(serenity::Permissions::KICK_MEMBERS));
        assert!(perms.contains(serenity::Permissions::BAN_MEMBERS));
        assert!(!perms.contains(serenity::Permissions::MODERATE_MEMBERS));
    }

    #[test]
    fn higher_top_role_outranks() {
        let bot = Rank::new(false, [3, 7]);
        let member = Rank::new(false, [5]);
        assert_eq!(bot.top_role_position, 7);
        assert!(outranks(bot, member));
        assert!(!outranks(member, bot));
    }

    #[test]
    fn equal_positions_do_not_outrank() {
        let bot = Rank::new(false, [5]);
        let member = Rank::new(false, [5]);
        assert!(!outranks(bot, member));
    }

    #[test]
    fn owner_is_never_outranked() {
        let bot = Rank::new(false, [250]);
        let owner = Rank::new(true, []);
        assert!(!outranks(bot, owner));
        assert!(outranks(owner, bot));
    }

    #[test]
    fn member_without_roles_sits_at_everyone() {
        assert_eq!(Rank::new(false, []).top_role_position, 0);
    }
}
