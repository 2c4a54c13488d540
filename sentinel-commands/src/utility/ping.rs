use sentinel_core::{Context, Error, Reply};

use crate::invocation::invoke;

/// Replies with Pong!
#[poise::command(slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    invoke(ctx, vec![]).await
}

pub fn ping_reply() -> Reply {
    Reply::private("Pong!")
}
