//! Request-level session handling.
//!
//! - `session` - cookie wrappers for the session ID and the OAuth2 CSRF state
//! - `auth` - `AuthGuard`, resolving a request's cookies into a `SessionState`

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
