use poise::serenity_prelude as serenity;
use tracing::debug;

use crate::client::{ContextResponder, SerenityPlatform};
use crate::dispatch;
use sentinel_core::{CapabilitySet, Context, Error, Interaction, OptionValue, UserRef};

/// Run the invoked command through the dispatcher.
///
/// The dispatcher sends the reply itself, so this never fails.
pub(crate) async fn invoke(
    ctx: Context<'_>,
    options: Vec<Option<(String, OptionValue)>>,
) -> Result<(), Error> {
    let (member, app_permissions) = match ctx {
        poise::Context::Application(app) => (
            app.interaction.member.as_deref(),
            app.interaction.app_permissions,
        ),
        poise::Context::Prefix(_) => (None, None),
    };

    let interaction = Interaction {
        command: ctx.command().name.clone(),
        options: options.into_iter().flatten().collect(),
        invoker: user_ref(ctx.author(), member.and_then(|member| member.nick.as_deref())),
        invoker_capabilities: member
            .and_then(|member| member.permissions)
            .map(CapabilitySet::from)
            .unwrap_or_default(),
        guild_id: ctx.guild_id(),
    };
    debug!(
        command = %interaction.command,
        invoker = interaction.invoker.id.get(),
        guild_id = interaction.guild_id.map(|id| id.get()),
        "interaction received"
    );

    let platform = SerenityPlatform::new(ctx.serenity_context(), app_permissions);
    let responder = ContextResponder::new(ctx);
    dispatch(&platform, &responder, &interaction).await;
    Ok(())
}

pub(crate) fn user_ref(user: &serenity::User, nick: Option<&str>) -> UserRef {
    let display_name = nick
        .map(str::to_owned)
        .or_else(|| user.global_name.clone())
        .unwrap_or_else(|| user.name.clone());

    UserRef {
        id: user.id,
        name: user.name.clone(),
        display_name,
    }
}

pub(crate) fn user_option(name: &str, user: &serenity::User) -> Option<(String, OptionValue)> {
    Some((name.to_owned(), OptionValue::User(user_ref(user, None))))
}

pub(crate) fn string_option(name: &str, value: Option<String>) -> Option<(String, OptionValue)> {
    value.map(|value| (name.to_owned(), OptionValue::String(value)))
}

pub(crate) fn number_option(name: &str, value: f64) -> Option<(String, OptionValue)> {
    Some((name.to_owned(), OptionValue::Number(value)))
}
