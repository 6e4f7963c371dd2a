use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test databases.
///
/// Collects the tables to create and the login records to seed, then `build()` opens a
/// fresh in-memory SQLite database and applies them in that order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_login("abc123", "T")
///     .build()
///     .await?;
///
/// let db = &test.db;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    logins: Vec<(String, String)>,
    has_login_table: bool,
}

impl TestBuilder {
    /// Creates a builder for an empty database.
    ///
    /// Without any tables every query fails, which is how tests simulate an
    /// unavailable session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table of a SeaORM entity, generated with SQLite syntax.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the `login_data` table backing the session store.
    ///
    /// Calling this more than once creates the table only once.
    pub fn with_login_tables(mut self) -> Self {
        if self.has_login_table {
            return self;
        }

        self.has_login_table = true;
        self.with_table(LoginData)
    }

    /// Seeds a fresh login record mapping `session_id` to `oauth_token`.
    ///
    /// Implies `with_login_tables()`.
    pub fn with_login(self, session_id: &str, oauth_token: &str) -> Self {
        let mut builder = self.with_login_tables();
        builder
            .logins
            .push((session_id.to_string(), oauth_token.to_string()));
        builder
    }

    /// Opens the database, creates the tables and seeds the logins.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use database
    /// - `Err(TestError::DbErr)` - Failed to connect, create a table or insert a login
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::in_memory().await?;

        context.create_tables(&self.tables).await?;
        context.seed_logins(&self.logins).await?;

        Ok(context)
    }
}
