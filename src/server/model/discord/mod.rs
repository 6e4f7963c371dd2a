pub mod guild;
pub mod user;

pub use guild::GuildSummary;
pub use user::UserProfile;
