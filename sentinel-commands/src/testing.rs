use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use poise::serenity_prelude as serenity;

use sentinel_core::{
    Capability, CapabilitySet, Error, Interaction, MemberView, OptionValue, Platform, Reply,
    Responder, UserRef,
};

pub(crate) const BOT_USER_ID: u64 = 999;
pub(crate) const INVOKER_USER_ID: u64 = 1;
pub(crate) const GUILD_ID: u64 = 10;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Mutation {
    Kick {
        user_id: u64,
        reason: String,
    },
    Ban {
        user_id: u64,
        reason: String,
    },
    Timeout {
        user_id: u64,
        until: serenity::Timestamp,
        reason: String,
    },
}

/// Records mutations instead of calling Discord.
pub(crate) struct FakePlatform {
    bot_capabilities: CapabilitySet,
    members: HashMap<serenity::UserId, MemberView>,
    fail_mutations: bool,
    mutations: Mutex<Vec<Mutation>>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self {
            bot_capabilities: admin(),
            members: HashMap::new(),
            fail_mutations: false,
            mutations: Mutex::new(Vec::new()),
        }
    }

    /// A regular member the bot outranks.
    pub(crate) fn member(id: u64, name: &str) -> MemberView {
        MemberView {
            user_id: serenity::UserId::new(id),
            name: name.to_owned(),
            manageable: true,
            is_administrator: false,
            timed_out_until: None,
        }
    }

    pub(crate) fn with_member(mut self, member: MemberView) -> Self {
        self.members.insert(member.user_id, member);
        self
    }

    pub(crate) fn with_bot_capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.bot_capabilities = capabilities;
        self
    }

    /// Every mutation is recorded and then fails.
    pub(crate) fn failing(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub(crate) fn mutations(&self) -> Vec<Mutation> {
        self.mutations.lock().unwrap().clone()
    }

    fn record(&self, mutation: Mutation) -> Result<(), Error> {
        self.mutations.lock().unwrap().push(mutation);
        if self.fail_mutations {
            anyhow::bail!("simulated transport failure");
        }
        Ok(())
    }
}

impl Platform for FakePlatform {
    fn bot_user_id(&self) -> serenity::UserId {
        serenity::UserId::new(BOT_USER_ID)
    }

    fn bot_capabilities(&self, _guild_id: serenity::GuildId) -> CapabilitySet {
        self.bot_capabilities
    }

    fn cached_member(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
    ) -> Option<MemberView> {
        self.members.get(&user_id).cloned()
    }

    async fn kick_member(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        self.record(Mutation::Kick {
            user_id: user_id.get(),
            reason: reason.to_owned(),
        })
    }

    async fn ban_member(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        self.record(Mutation::Ban {
            user_id: user_id.get(),
            reason: reason.to_owned(),
        })
    }

    async fn timeout_member(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        until: serenity::Timestamp,
        reason: &str,
    ) -> Result<(), Error> {
        self.record(Mutation::Timeout {
            user_id: user_id.get(),
            until,
            reason: reason.to_owned(),
        })
    }
}

pub(crate) struct FakeResponder {
    replies: Mutex<Vec<Reply>>,
    attempts: AtomicUsize,
    responded: AtomicBool,
    fail: bool,
}

impl FakeResponder {
    pub(crate) fn new() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            responded: AtomicBool::new(false),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Responder for FakeResponder {
    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::SeqCst)
    }

    async fn respond(&self, reply: Reply) -> Result<(), Error> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.responded.store(true, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("simulated reply failure");
        }
        self.replies.lock().unwrap().push(reply);
        Ok(())
    }
}

pub(crate) fn user(id: u64, name: &str) -> UserRef {
    UserRef {
        id: serenity::UserId::new(id),
        name: name.to_owned(),
        display_name: name.to_owned(),
    }
}

pub(crate) fn chat_input(
    command: &str,
    options: Vec<(String, OptionValue)>,
    invoker_capabilities: CapabilitySet,
) -> Interaction {
    Interaction {
        command: command.to_owned(),
        options,
        invoker: UserRef {
            id: serenity::UserId::new(INVOKER_USER_ID),
            name: "moderator".to_owned(),
            display_name: "Mod".to_owned(),
        },
        invoker_capabilities,
        guild_id: Some(serenity::GuildId::new(GUILD_ID)),
    }
}

pub(crate) fn target_option(id: u64, name: &str) -> (String, OptionValue) {
    ("target".to_owned(), OptionValue::User(user(id, name)))
}

pub(crate) fn reason_option(reason: &str) -> (String, OptionValue) {
    ("reason".to_owned(), OptionValue::String(reason.to_owned()))
}

/// Administrator, so every capability check passes.
pub(crate) fn admin() -> CapabilitySet {
    CapabilitySet::from(serenity::Permissions::ADMINISTRATOR)
}

pub(crate) fn caps(capabilities: &[Capability]) -> CapabilitySet {
    let permissions = capabilities
        .iter()
        .fold(serenity::Permissions::empty(), |bits, capability| {
            bits | capability.permission()
        });
    CapabilitySet::from(permissions)
}
