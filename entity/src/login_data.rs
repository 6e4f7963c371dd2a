use sea_orm::entity::prelude::*;

/// A browser session that completed the Discord OAuth2 flow.
///
/// `session_id` is the value of the client's `session_id` cookie and `oauth_token`
/// the access token Discord issued for it. `created_at` is refreshed on every upsert
/// and drives server-side session expiry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "login_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: String,
    #[sea_orm(column_type = "Text")]
    pub oauth_token: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
