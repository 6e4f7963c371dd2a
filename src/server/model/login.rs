//! Session state resolved from the request's cookies and the login table.

use oauth2::AccessToken;

/// Where a request stands in the login lifecycle.
///
/// Resolved once per request from the `session_id` cookie and the persisted
/// `login_data` record for it.
#[derive(Debug)]
pub enum SessionState {
    /// No `session_id` cookie was sent.
    Anonymous,
    /// A `session_id` cookie was sent but no live login record exists for it.
    Unauthenticated {
        /// The cookie value.
        session_id: String,
    },
    /// The cookie maps to a stored OAuth2 access token.
    Authenticated {
        /// The cookie value.
        session_id: String,
        /// Discord access token stored for the session.
        token: AccessToken,
    },
}
