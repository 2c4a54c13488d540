use poise::serenity_prelude as serenity;

use sentinel_core::{Context, Error, Interaction, Reply};

use crate::invocation::{invoke, user_option};

/// Sends a custom motivational message.
#[poise::command(slash_command, category = "Utility")]
pub async fn motivate(
    ctx: Context<'_>,
    #[description = "The user you want to send the motivational message to."]
    target_user: serenity::User,
) -> Result<(), Error> {
    invoke(ctx, vec![user_option("target_user", &target_user)]).await
}

pub fn motivate_reply(interaction: &Interaction) -> Reply {
    let Some(target) = interaction.user_option("target_user") else {
        return Reply::private("Usage: `/motivate <target_user>`");
    };

    Reply::public(format!(
        "Hey {}, just a reminder that **you are doing amazing!** Keep pushing through. \
         Your effort is noticed by {}. 🎉",
        target.mention(),
        interaction.invoker.name
    ))
}
