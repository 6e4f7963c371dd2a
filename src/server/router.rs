use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::server::{
    controller::{
        auth::{callback, invite, login, logout},
        dashboard::dashboard,
        home::home,
        manage::manage,
    },
    state::AppState,
};

/// Builds the application router.
///
/// `static_dir` holds `favicon.ico` and the files served under `/static` and
/// `/assets`.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/home", get(home))
        .route("/login", get(login))
        .route("/auth", get(callback))
        .route("/auth/", get(callback))
        .route("/dashboard", get(dashboard))
        .route("/logout", get(logout))
        .route("/invite", get(invite))
        .route("/manage/{guild_id}", get(manage))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/assets", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
