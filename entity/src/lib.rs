//! SeaORM entity definitions for the marketplace data model.
//!
//! Each module defines one table together with its status enum (where the
//! table has a lifecycle) and its relations. Status values are closed
//! `ActiveEnum` types rather than free strings so invalid states are
//! unrepresentable in application code.

pub mod auction;
pub mod bid;
pub mod offer;
pub mod order;
pub mod prelude;
pub mod user;
pub mod vehicle;
