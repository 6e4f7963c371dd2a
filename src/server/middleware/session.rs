//! Type-safe session cookie management.
//!
//! This module provides type-safe interfaces for the two cookies the login flow relies on,
//! organized by concern:
//! - `AuthSession` - the long-lived `session_id` cookie tying a browser to its login record
//! - `CsrfSession` - the short-lived `oauth_state` cookie protecting the OAuth2 callback
//!
//! Each struct wraps the request's `CookieJar` and exposes only the operations relevant
//! to its concern. Cookies are `HttpOnly`, `SameSite=Lax`, scoped to `/`, and `Secure`
//! when configured.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use crate::server::{
    config::SessionSettings,
    error::{auth::AuthError, AppError},
};

// Cookie name constants
pub const SESSION_COOKIE: &str = "session_id";
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Lifetime of the CSRF state cookie; the consent screen must be completed within it.
const OAUTH_STATE_MAX_AGE_MINUTES: i64 = 10;

/// `session_id` cookie management.
pub struct AuthSession<'a> {
    jar: &'a CookieJar,
    settings: SessionSettings,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `jar` - The request's cookies
    /// - `settings` - Session lifetime and cookie attributes
    pub fn new(jar: &'a CookieJar, settings: SessionSettings) -> Self {
        Self { jar, settings }
    }

    /// Returns the session ID sent by the client.
    ///
    /// An empty cookie value counts as no cookie.
    ///
    /// # Returns
    /// - `Some(session_id)` - The client sent a `session_id` cookie
    /// - `None` - No session cookie
    pub fn session_id(&self) -> Option<String> {
        self.jar
            .get(SESSION_COOKIE)
            .map(Cookie::value)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Issues a fresh random session ID.
    ///
    /// Returns the jar with the new `session_id` cookie added along with the ID itself.
    /// IDs are v4 UUIDs and are not checked against existing records.
    ///
    /// # Returns
    /// - `(CookieJar, String)` - Updated jar and the new session ID
    pub fn issue(&self) -> (CookieJar, String) {
        let session_id = Uuid::new_v4().to_string();

        let cookie = build_cookie(
            SESSION_COOKIE,
            session_id.clone(),
            self.settings.cookie_max_age(),
            self.settings,
        );

        (self.jar.clone().add(cookie), session_id)
    }
}

/// CSRF protection cookie management.
///
/// The state token minted for the consent URL is stored in the `oauth_state` cookie and
/// compared against the `state` query parameter of the OAuth2 callback.
pub struct CsrfSession<'a> {
    jar: &'a CookieJar,
    settings: SessionSettings,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    ///
    /// # Arguments
    /// - `jar` - The request's cookies
    /// - `settings` - Cookie attributes
    pub fn new(jar: &'a CookieJar, settings: SessionSettings) -> Self {
        Self { jar, settings }
    }

    /// Stores a CSRF token in the `oauth_state` cookie.
    ///
    /// # Arguments
    /// - `token` - The CSRF token embedded in the consent URL
    ///
    /// # Returns
    /// - `CookieJar` - Updated jar
    pub fn set_token(&self, token: String) -> CookieJar {
        let cookie = build_cookie(
            OAUTH_STATE_COOKIE,
            token,
            Duration::minutes(OAUTH_STATE_MAX_AGE_MINUTES),
            self.settings,
        );

        self.jar.clone().add(cookie)
    }

    /// Validates the callback's `state` parameter against the stored token.
    ///
    /// # Arguments
    /// - `callback_state` - The `state` query parameter of the callback, if present
    ///
    /// # Returns
    /// - `Ok(())` - State matches the cookie
    /// - `Err(AppError::AuthErr(CsrfValidationFailed))` - Missing cookie, missing
    ///   parameter, or mismatch
    pub fn validate(&self, callback_state: Option<&str>) -> Result<(), AppError> {
        let stored_state = self
            .jar
            .get(OAUTH_STATE_COOKIE)
            .map(Cookie::value)
            .filter(|value| !value.is_empty());

        match (stored_state, callback_state) {
            (Some(stored), Some(received)) if stored == received => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }

    /// Expires the `oauth_state` cookie so each token is used once.
    ///
    /// # Returns
    /// - `CookieJar` - Updated jar
    pub fn clear(&self) -> CookieJar {
        let cookie = build_cookie(OAUTH_STATE_COOKIE, String::new(), Duration::ZERO, self.settings);

        self.jar.clone().add(cookie)
    }
}

fn build_cookie(
    name: &'static str,
    value: String,
    max_age: Duration,
    settings: SessionSettings,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure_cookies)
        .max_age(max_age)
        .build()
}
