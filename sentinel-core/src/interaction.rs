use poise::serenity_prelude as serenity;

use crate::capability::CapabilitySet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRef {
    pub id: serenity::UserId,
    pub name: String,
    pub display_name: String,
}

impl UserRef {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id.get())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    User(UserRef),
    String(String),
    Number(f64),
}

#[derive(Clone, Debug)]
pub struct Interaction {
    pub command: String,
    pub options: Vec<(String, OptionValue)>,
    pub invoker: UserRef,
    pub invoker_capabilities: CapabilitySet,
    pub guild_id: Option<serenity::GuildId>,
}

impl Interaction {
    fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(option_name, _)| option_name == name)
            .map(|(_, value)| value)
    }

    pub fn user_option(&self, name: &str) -> Option<&UserRef> {
        match self.option(name) {
            Some(OptionValue::User(user)) => Some(user),
            _ => None,
        }
    }

    /// Empty and whitespace-only strings count as absent.
    pub fn string_option(&self, name: &str) -> Option<&str> {
        match self.option(name) {
            Some(OptionValue::String(value)) if !value.trim().is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn number_option(&self, name: &str) -> Option<f64> {
        match self.option(name) {
            Some(OptionValue::Number(value)) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Ephemeral, only the invoker sees it.
    Private,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub visibility: Visibility,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Public,
        }
    }

    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Private,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        self.visibility == Visibility::Private
    }
}
