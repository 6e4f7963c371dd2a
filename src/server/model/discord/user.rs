use serenity::all::User;

/// The logged-in Discord user as shown in the navigation bar and dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Discord ID of the user.
    pub discord_id: u64,
    /// `username#discriminator`, or the bare username for migrated accounts.
    pub tag: String,
    /// Global display name if set, otherwise the username.
    pub display_name: String,
    /// Avatar URL, falling back to Discord's default avatar.
    pub avatar_url: String,
}

impl UserProfile {
    /// Converts a Serenity user fetched from `/users/@me`.
    ///
    /// # Arguments
    /// - `user` - Serenity user returned by Discord's API
    ///
    /// # Returns
    /// - `UserProfile` - Display-ready user projection
    pub fn from_serenity(user: &User) -> Self {
        Self {
            discord_id: user.id.get(),
            tag: user.tag(),
            display_name: user.display_name().to_string(),
            avatar_url: user.face(),
        }
    }
}
