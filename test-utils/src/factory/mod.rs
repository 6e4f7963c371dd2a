//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let login = factory::create_login(&db).await?;
//!
//!     // Create with custom values
//!     let login = factory::login_data::LoginDataFactory::new(&db)
//!         .session_id("abc123")
//!         .oauth_token("T")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `login_data` - Create persisted login records
//! - `helpers` - Unique ID generation shared by factories

pub mod helpers;
pub mod login_data;

// Re-export commonly used factory functions for concise usage
pub use login_data::{create_login, create_login_for_session};
