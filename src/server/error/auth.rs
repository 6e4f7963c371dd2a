use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_page;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The `state` parameter in the OAuth callback URL does not match the token stored
    /// in the `oauth_state` cookie, indicating a potential CSRF attack or a stale callback
    /// request. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord rejected the authorization code during the token exchange.
    ///
    /// Happens when the code is invalid, expired, or was already used. Results in a
    /// 400 Bad Request response.
    #[error("Discord rejected the authorization code: {0}")]
    CodeExchangeFailed(String),

    /// Discord rejected the stored access token.
    ///
    /// The token has expired or the user revoked the application's access. Results in
    /// a 401 Unauthorized response.
    #[error("Discord rejected the stored access token")]
    TokenInvalid,
}

/// Converts authentication errors into HTTP responses.
///
/// - `CsrfValidationFailed` / `CodeExchangeFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `TokenInvalid` → 401 Unauthorized asking the user to log in again
///
/// Errors are logged at warn level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::CodeExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                "Your Discord login has expired, please log in again.",
            ),
        };

        error_page(status, message)
    }
}
