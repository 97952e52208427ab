//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return entity models or small outcome types to the service layer. All state
//! transitions that must be race-free (bid recording, status flips, order creation)
//! are expressed here as conditional updates or transactions so the service layer
//! never has to reason about interleavings.

pub mod auction;
pub mod bid;
pub mod offer;
pub mod order;
pub mod user;
pub mod vehicle;

#[cfg(test)]
pub mod test;
