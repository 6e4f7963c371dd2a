//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating the Serenity structs returned
//! by Discord's OAuth2-scoped REST endpoints (`/users/@me`, `/users/@me/guilds`). These
//! factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_info, create_test_user};
//!
//! let user = create_test_user(42, "nat");
//! let guild = create_test_guild_info(123456789, "Test Guild", Some("abc123"));
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `guild_info::create_test_guild_info` - Create Serenity GuildInfo objects

pub mod guild_info;
pub mod user;

// Re-export commonly used functions for convenience
pub use guild_info::{create_test_guild_info, create_test_owned_guild_info};
pub use user::{create_test_user, create_test_user_with_avatar};

/// Pads an image hash to the length Discord uses.
///
/// Normal hashes are 32 characters, animated hashes are 34 (`a_` prefix + 32 hex chars).
pub(crate) fn format_image_hash(hash: &str) -> String {
    if hash.starts_with("a_") {
        if hash.len() < 34 {
            format!("{:0<34}", hash)
        } else {
            hash.to_string()
        }
    } else if hash.len() < 32 {
        format!("{:0<32}", hash)
    } else {
        hash.to_string()
    }
}
