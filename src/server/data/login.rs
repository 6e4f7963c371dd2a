//! Login data repository backing the session store.
//!
//! This module provides the `LoginRepository` for the `login_data` table, which maps a
//! browser's `session_id` cookie to the Discord OAuth2 access token obtained for it. Every
//! operation is executed against the database immediately.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use oauth2::AccessToken;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for login records.
///
/// Records older than `expires_before` are treated as absent by the read operations,
/// so an expired session behaves exactly like one that was never logged in.
pub struct LoginRepository<'a> {
    db: &'a DatabaseConnection,
    expires_before: DateTime<Utc>,
}

impl<'a> LoginRepository<'a> {
    /// Creates a new LoginRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `expires_before` - Records created before this instant are treated as expired
    ///
    /// # Returns
    /// - `LoginRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection, expires_before: DateTime<Utc>) -> Self {
        Self { db, expires_before }
    }

    /// Checks whether a live login record exists for the session.
    ///
    /// # Arguments
    /// - `session_id` - Value of the client's `session_id` cookie
    ///
    /// # Returns
    /// - `Ok(true)` - A non-expired record exists
    /// - `Ok(false)` - No record, or the record has expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_session(&self, session_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::LoginData::find()
            .filter(entity::login_data::Column::SessionId.eq(session_id))
            .filter(entity::login_data::Column::CreatedAt.gte(self.expires_before))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the OAuth2 access token stored for the session.
    ///
    /// # Arguments
    /// - `session_id` - Value of the client's `session_id` cookie
    ///
    /// # Returns
    /// - `Ok(Some(AccessToken))` - Token of the live record
    /// - `Ok(None)` - No record, or the record has expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_token(&self, session_id: &str) -> Result<Option<AccessToken>, DbErr> {
        let entity = entity::prelude::LoginData::find_by_id(session_id.to_string())
            .filter(entity::login_data::Column::CreatedAt.gte(self.expires_before))
            .one(self.db)
            .await?;

        Ok(entity.map(|login| AccessToken::new(login.oauth_token)))
    }

    /// Stores the access token for the session, replacing any existing record.
    ///
    /// The record's `created_at` is reset to now, which restarts the session's lifetime.
    ///
    /// # Arguments
    /// - `session_id` - Value of the client's `session_id` cookie
    /// - `token` - Access token obtained from the authorization code exchange
    ///
    /// # Returns
    /// - `Ok(())` - Record inserted or updated
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn put(&self, session_id: &str, token: &AccessToken) -> Result<(), DbErr> {
        entity::prelude::LoginData::insert(entity::login_data::ActiveModel {
            session_id: ActiveValue::Set(session_id.to_string()),
            oauth_token: ActiveValue::Set(token.secret().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::login_data::Column::SessionId)
                .update_columns([
                    entity::login_data::Column::OauthToken,
                    entity::login_data::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the login record for the session.
    ///
    /// Deleting a session that has no record is not an error.
    ///
    /// # Arguments
    /// - `session_id` - Value of the client's `session_id` cookie
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted or already absent
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, session_id: &str) -> Result<(), DbErr> {
        entity::prelude::LoginData::delete_many()
            .filter(entity::login_data::Column::SessionId.eq(session_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every expired login record.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn purge_expired(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::LoginData::delete_many()
            .filter(entity::login_data::Column::CreatedAt.lt(self.expires_before))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
