//! Test factory for creating Serenity GuildInfo objects.
//!
//! `GuildInfo` is the partial guild returned by `GET /users/@me/guilds`, which is all
//! an OAuth2 bearer token with the `guilds` scope can see.

use serenity::all::GuildInfo;

use super::format_image_hash;

/// Creates a test Serenity GuildInfo with customizable fields.
///
/// The icon hash is automatically padded to 32 characters (Discord's icon hash format)
/// if it's shorter. The current user is not the owner and has no permissions.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildInfo (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild_info::create_test_guild_info;
///
/// let guild = create_test_guild_info(123456789, "Test Guild", None);
/// ```
pub fn create_test_guild_info(guild_id: u64, name: &str, icon_hash: Option<&str>) -> GuildInfo {
    build_guild_info(guild_id, name, icon_hash, false, "0")
}

/// Creates a test GuildInfo owned by the current user with the Administrator permission.
pub fn create_test_owned_guild_info(guild_id: u64, name: &str) -> GuildInfo {
    build_guild_info(guild_id, name, None, true, "8")
}

fn build_guild_info(
    guild_id: u64,
    name: &str,
    icon_hash: Option<&str>,
    owner: bool,
    permissions: &str,
) -> GuildInfo {
    let formatted_icon = icon_hash.map(format_image_hash);

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "owner": owner,
        "permissions": permissions,
        "features": [],
    }))
    .expect("Failed to create test guild info")
}
