//! Login record factory for creating persisted sessions.
//!
//! This module provides factory methods for creating `login_data` rows with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test login records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::login_data::LoginDataFactory;
///
/// let login = LoginDataFactory::new(&db)
///     .session_id("abc123")
///     .oauth_token("T")
///     .build()
///     .await?;
/// ```
pub struct LoginDataFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: String,
    oauth_token: String,
    created_at: DateTime<Utc>,
}

impl<'a> LoginDataFactory<'a> {
    /// Creates a new LoginDataFactory with default values.
    ///
    /// Defaults:
    /// - session_id: `"session_{id}"` where id is auto-incremented
    /// - oauth_token: `"token_{id}"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LoginDataFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            session_id: format!("session_{}", id),
            oauth_token: format!("token_{}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the session ID (cookie value) of the record.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Sets the stored OAuth access token.
    pub fn oauth_token(mut self, oauth_token: impl Into<String>) -> Self {
        self.oauth_token = oauth_token.into();
        self
    }

    /// Sets the creation timestamp, used to simulate expired sessions.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the login record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::login_data::Model)` - Created login record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::login_data::Model, DbErr> {
        entity::login_data::ActiveModel {
            session_id: ActiveValue::Set(self.session_id),
            oauth_token: ActiveValue::Set(self.oauth_token),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a login record with default values.
///
/// Shorthand for `LoginDataFactory::new(db).build().await`.
pub async fn create_login(db: &DatabaseConnection) -> Result<entity::login_data::Model, DbErr> {
    LoginDataFactory::new(db).build().await
}

/// Creates a login record mapping `session_id` to `oauth_token`.
pub async fn create_login_for_session(
    db: &DatabaseConnection,
    session_id: &str,
    oauth_token: &str,
) -> Result<entity::login_data::Model, DbErr> {
    LoginDataFactory::new(db)
        .session_id(session_id)
        .oauth_token(oauth_token)
        .build()
        .await
}
