//! Serverbot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the serverbot
//! application. This crate offers a builder pattern for creating server list source
//! files on disk, in-memory server fixtures, and factories for Serenity interaction
//! payloads.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for writing a server list file
//! - **TestContext**: Test environment owning the temporary server list file
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory server identifiers with no file backing
//! - **serenity**: Serenity `CommandData` factories built from Discord-shaped JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_servers() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_server("minecraft")
//!         .with_server("valheim")
//!         .build()?;
//!
//!     let registry = ServerRegistry::load(test.path()).await?;
//!     // Perform registry queries...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
