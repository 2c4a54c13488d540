use sentinel_core::{Context, Error, Interaction, Reply};

use crate::invocation::invoke;

/// The bot greets you!
#[poise::command(slash_command, category = "Utility")]
pub async fn hello(ctx: Context<'_>) -> Result<(), Error> {
    invoke(ctx, vec![]).await
}

pub fn hello_reply(interaction: &Interaction) -> Reply {
    Reply::public(format!(
        "Hello, {}! I am your friendly bot.",
        interaction.invoker.display_name
    ))
}

#[cfg(test)]
mod tests {
    use super::hello_reply;
    use crate::testing::chat_input;
    use sentinel_core::{CapabilitySet, Visibility};

    #[test]
    fn greets_invoker_by_display_name() {
        let reply = hello_reply(&chat_input("hello", vec![], CapabilitySet::empty()));
        assert_eq!(reply.content, "Hello, Mod! I am your friendly bot.");
        assert_eq!(reply.visibility, Visibility::Public);
    }
}
