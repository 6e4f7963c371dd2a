use entity::login_data;
use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ActiveValue, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// An isolated in-memory SQLite database for a single test.
///
/// Every context opens its own `sqlite::memory:` connection, so tests never see each
/// other's rows and need no cleanup.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Opens a fresh, empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context without any tables
    /// - `Err(TestError::DbErr)` - SQLite could not be opened
    pub async fn in_memory() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Executes CREATE TABLE statements in order.
    pub async fn create_tables(&self, stmts: &[TableCreateStatement]) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Inserts a login record for each `(session_id, oauth_token)` pair.
    ///
    /// Requires the `login_data` table to exist.
    pub async fn seed_logins(&self, logins: &[(String, String)]) -> Result<(), TestError> {
        for (session_id, oauth_token) in logins {
            login_data::ActiveModel {
                session_id: ActiveValue::Set(session_id.clone()),
                oauth_token: ActiveValue::Set(oauth_token.clone()),
                created_at: ActiveValue::Set(chrono::Utc::now()),
            }
            .insert(&self.db)
            .await?;
        }

        Ok(())
    }
}
