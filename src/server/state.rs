//! Shared request state.
//!
//! `AppState` is built once in `main` and handed to the router; axum clones it into
//! every handler. Everything in it is either a handle (database pool, `Arc`) or a
//! small value, so the clones are cheap.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use url::Url;

use super::{config::SessionSettings, service::discord::DiscordApi};

/// Discord OAuth2 client with the authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Pool backing the `login_data` session store.
    pub db: DatabaseConnection,

    /// Code exchange and user/guild reads. Tests swap in `MockDiscord`.
    pub discord: Arc<dyn DiscordApi>,

    /// Builds consent URLs. `DiscordRestClient` holds its own clone for the code
    /// exchange.
    pub oauth_client: OAuth2Client,

    pub session: SessionSettings,

    /// Target of `/invite`.
    pub invite_url: Url,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        discord: Arc<dyn DiscordApi>,
        oauth_client: OAuth2Client,
        session: SessionSettings,
        invite_url: Url,
    ) -> Self {
        Self {
            db,
            discord,
            oauth_client,
            session,
            invite_url,
        }
    }
}
