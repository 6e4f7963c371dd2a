//! Guild Dashboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dashboard
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for persisted login records, and factories for the Serenity
//! objects returned by Discord's REST API.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database row factories
//! - **serenity**: Discord API object factories
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::LoginData;
//!
//! #[tokio::test]
//! async fn test_login_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(LoginData)
//!         .build()
//!         .await?;
//!
//!     let db = &test.db;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
