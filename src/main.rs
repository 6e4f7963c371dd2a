mod server;

use std::{path::Path, sync::Arc};

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::session_cleanup,
    service::discord::{rest::DiscordRestClient, DiscordApi},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let invite_url = startup::build_invite_url(&config)?;

    let discord: Arc<dyn DiscordApi> = Arc::new(DiscordRestClient::new(
        http_client,
        oauth_client.clone(),
        config.discord_api_base_url.clone(),
    ));

    let mut scheduler = session_cleanup::start_scheduler(db.clone(), config.session).await?;

    let state = AppState::new(db.clone(), discord, oauth_client, config.session, invite_url);
    let app = router::router(state, Path::new(&config.static_dir));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    scheduler.shutdown().await?;
    db.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
