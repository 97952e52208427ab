//! Autolot Test Utils
//!
//! Shared testing utilities for the marketplace backend. Provides a builder
//! for test contexts backed by in-memory SQLite databases, plus entity
//! factories that cut the boilerplate of setting up sellers, vehicles,
//! auctions, and bids in tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_auction_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_auction_tables()
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
