//! Test factory for creating Serenity User objects.

use serenity::all::User;

use super::format_image_hash;

/// Creates a test Serenity User as returned by `GET /users/@me`.
///
/// The user has no avatar, no global display name and the post-2023 `"0"`
/// discriminator, so `tag()` renders as the plain username.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    build_user(user_id, username, None)
}

/// Creates a test Serenity User with an avatar hash.
///
/// The avatar hash is padded to 32 characters if it's shorter.
pub fn create_test_user_with_avatar(user_id: u64, username: &str, avatar_hash: &str) -> User {
    build_user(user_id, username, Some(format_image_hash(avatar_hash)))
}

fn build_user(user_id: u64, username: &str, avatar: Option<String>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": avatar,
        "bot": false,
    }))
    .expect("Failed to create test user")
}
