mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use dioxus_logger::tracing::{self, Level};
use serenity::all::GuildId;

use crate::{
    bot::handler::Handler,
    config::Config,
    error::{internal::InternalError, AppError},
    service::game::pacer::RevealPacer,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO).map_err(|e| InternalError::LoggerInit(e.to_string()))?;

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let game = startup::setup_game_service(&config);
    let (shutdown, pacer) = RevealPacer::channel();

    let handler = Handler::new(game, GuildId::from(config.discord_guild_id), pacer);
    let mut client = bot::start::init_bot(&config, handler).await?;

    // Stop any reveal in progress and disconnect cleanly on Ctrl-C
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        let _ = shutdown.send(true);
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(&mut client).await
}
