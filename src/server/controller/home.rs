use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;
use dioxus_logger::tracing;

use crate::server::{
    controller::auth::auth_service,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::login::SessionState,
    render,
    service::discord::DiscordService,
    state::AppState,
};

/// GET /, /home - Landing page
///
/// Personalized with the user's avatar and tag when the session is logged in. A
/// stored token Discord no longer accepts is removed and the anonymous page is shown.
///
/// # Returns
/// - `200 OK`: HTML landing page
/// - `500 Internal Server Error`: Session store unavailable
/// - `502 Bad Gateway`: Discord unreachable
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Result<Html<String>, AppError> {
    let user = match AuthGuard::new(&state, &jar).resolve().await? {
        SessionState::Authenticated { session_id, token } => {
            match DiscordService::new(state.discord.as_ref())
                .fetch_user(&token)
                .await
            {
                Ok(user) => Some(user),
                Err(err) => match auth_service(&state)
                    .discard_rejected_login(&session_id, err)
                    .await
                {
                    AppError::AuthErr(AuthError::TokenInvalid) => {
                        tracing::warn!(
                            "Stored Discord token was rejected, showing anonymous home page"
                        );
                        None
                    }
                    err => return Err(err),
                },
            }
        }
        _ => None,
    };

    Ok(Html(render::render_home(user.as_ref())))
}
