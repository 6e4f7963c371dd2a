//! Error types of the dashboard backend.
//!
//! Handlers return `Result<_, AppError>` and axum turns the error into a response
//! through the `IntoResponse` impl below, so the mapping from fault to status code
//! lives in this one place. Every error response is an HTML page; the underlying
//! error is only written to the log.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{
    error::{auth::AuthError, config::ConfigError},
    render,
};

/// Any failure a request, the startup sequence or the cleanup job can run into.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable. Only raised during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login failure; the status code is chosen by `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// The session store could not be queried.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord could not be reached, answered with an unexpected status, or sent a
    /// body that did not deserialize.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord's token endpoint failed for a reason other than rejecting the code.
    #[error("Discord OAuth2 request failed: {0}")]
    DiscordUnavailable(String),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A configured Discord URL is malformed.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Binding or serving the listening socket failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The requested guild is not visible to the user. The message is shown on the page.
    #[error("{0}")]
    NotFound(String),
}

/// Maps each fault to its status code:
///
/// - `AuthErr` - 400 or 401, see `AuthError`
/// - `NotFound` - 404 with the error's own message
/// - `ReqwestErr`, `DiscordUnavailable` - 502 Bad Gateway
/// - everything else - 500 with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(message) => {
                tracing::debug!("Not found: {}", message);
                error_page(StatusCode::NOT_FOUND, &message)
            }
            Self::ReqwestErr(_) | Self::DiscordUnavailable(_) => {
                tracing::error!("Discord request failed: {}", self);
                error_page(
                    StatusCode::BAD_GATEWAY,
                    "Discord is not responding right now, please try again later.",
                )
            }
            err => {
                tracing::error!("{}", err);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// HTML error page with the given status.
pub(crate) fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(render::render_error_page(status, message))).into_response()
}
