use serenity::all::GuildInfo;

/// A guild the logged-in user belongs to.
///
/// Built from the partial guild objects returned by `/users/@me/guilds`, which is
/// all an OAuth2 bearer token with the `guilds` scope can read.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
    /// Guild icon URL if the guild has an icon.
    pub icon_url: Option<String>,
    /// Whether the logged-in user owns the guild.
    pub owner: bool,
    /// Whether the logged-in user may manage the guild (owner, administrator or
    /// `MANAGE_GUILD`).
    pub can_manage: bool,
}

impl GuildSummary {
    /// Converts a Serenity partial guild at the service boundary.
    ///
    /// # Arguments
    /// - `guild` - Partial guild returned by Discord's API
    ///
    /// # Returns
    /// - `GuildSummary` - Display-ready guild projection
    pub fn from_serenity(guild: &GuildInfo) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
            owner: guild.owner,
            can_manage: guild.owner
                || guild.permissions.administrator()
                || guild.permissions.manage_guild(),
        }
    }

    /// Up to three initials of the guild name, shown when the guild has no icon.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(3)
            .collect()
    }
}
