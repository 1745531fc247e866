use std::sync::Arc;

use exchange_desk_bot::AppState;
use exchange_desk_bot::config::Config;
use exchange_desk_bot::database::{PgStore, init};
use exchange_desk_bot::exchange::WorkflowEngine;
use exchange_desk_bot::handler::Handler;
use exchange_desk_bot::services::notify::DiscordNotifier;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine when the variables come from the environment.
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to the database.");
    init::ensure_schema(&pool, config.admin_id)
        .await
        .expect("Failed to prepare the database schema.");
    info!(admin_id = config.admin_id, prefix = %config.prefix, "database ready");

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            allowed_guild_id: GuildId::new(config.server_id),
        })
        .await
        .expect("Error creating the Discord client.");

    let store = Arc::new(PgStore::new(pool));
    let notifier = Arc::new(DiscordNotifier::new(client.http.clone(), config.admin_id));
    let engine = WorkflowEngine::new(store.clone(), store, notifier, config.limits);
    let app_state = Arc::new(AppState::new(engine, config.admin_id, config.prefix.clone()));

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!(error = ?why, "client error");
    }
}
