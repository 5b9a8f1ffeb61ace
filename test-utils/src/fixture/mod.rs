//! Test fixtures providing reusable test data without file backing.
//!
//! This module contains fixture functions that create in-memory server identifier lists
//! for use in unit tests of the command handlers. Unlike `TestBuilder`, fixtures do NOT
//! write anything to disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let registry = ServerRegistry::from_lines(fixture::servers::servers());
//! ```

pub mod servers;
