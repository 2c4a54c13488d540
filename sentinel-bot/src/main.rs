mod config;

use poise::serenity_prelude as serenity;
use tracing::{Level, Metadata, debug, error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use config::Config;
use sentinel_commands::dispatch::{unexpected_error_message, unknown_command_message};
use sentinel_core::{Data, Error};

const PRESENCE_ACTIVITY: &str = "/kick, /ban, /timeout";

/// Library targets that only get to log warnings and errors.
const NOISY_TARGETS: [&str; 3] = ["serenity::gateway", "serenity::http", "poise"];

fn should_log(metadata: &Metadata<'_>) -> bool {
    let level = *metadata.level();
    if NOISY_TARGETS
        .iter()
        .any(|prefix| metadata.target().starts_with(prefix))
    {
        return level <= Level::WARN;
    }
    level <= Level::INFO
}

fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(filter_fn(should_log));

    tracing_subscriber::registry().with(fmt_layer).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let dev_guild_id = config.dev_guild_id;
    let register_commands = config.register_commands;

    // Member cache backs the "is this user in the server" check.
    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: sentinel_commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!(user = %ready.user.name, "Sentinel is online!");

                ctx.set_presence(
                    Some(serenity::ActivityData::watching(PRESENCE_ACTIVITY)),
                    serenity::OnlineStatus::DoNotDisturb,
                );

                if !register_commands {
                    warn!("Command registration disabled (set REGISTER_COMMANDS=true to enable).");
                    return Ok(Data);
                }

                info!("Started refreshing application (/) commands.");
                let commands = &framework.options().commands;
                let registered = match dev_guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(ctx, commands, guild_id).await
                    }
                    None => poise::builtins::register_globally(ctx, commands).await,
                };

                match registered {
                    Ok(()) => info!(
                        count = commands.len(),
                        guild_id = dev_guild_id.map(|id| id.get()),
                        "Successfully reloaded application (/) commands."
                    ),
                    Err(source) => error!(?source, "command registration failed"),
                }

                Ok(Data)
            })
        })
        .build();

    info!("Sentinel is connecting...");

    let mut client = serenity::ClientBuilder::new(config.token, intents)
        .application_id(config.application_id)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::UnknownInteraction {
            ctx, interaction, ..
        } => {
            debug!(command = %interaction.data.name, "unknown command invocation");

            let response = serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(unknown_command_message())
                    .ephemeral(true),
            );
            if let Err(source) = interaction.create_response(ctx, response).await {
                error!(?source, "failed to answer unknown command");
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, command = %ctx.command().name, "command error");
            reply_with_error(ctx).await;
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            warn!(?error, command = %ctx.command().name, "could not parse command options");
            reply_with_error(ctx).await;
        }
        poise::FrameworkError::Setup { error, .. } => {
            error!(?error, "framework setup failed");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn reply_with_error(ctx: sentinel_core::Context<'_>) {
    let reply = poise::CreateReply::default()
        .content(unexpected_error_message())
        .ephemeral(true);
    if let Err(source) = ctx.send(reply).await {
        error!(?source, "failed to send error reply");
    }
}
