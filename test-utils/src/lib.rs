//! Skybot Test Utils
//!
//! Provides shared testing utilities for the bot's repository, settings cache and
//! dispatcher tests. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and factories for seeding rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildSettings;
//!
//! #[tokio::test]
//! async fn test_settings_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildSettings)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
