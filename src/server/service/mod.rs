//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data layer / Discord API:
//!
//! - **auth**: OAuth2 consent URL, authorization code exchange, session lookup and logout
//! - **discord**: the `DiscordApi` seam and the user/guild projections built on top of it

pub mod auth;
pub mod discord;
