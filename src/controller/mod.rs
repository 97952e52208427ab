//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert between DTOs and service
//! parameters, and map service results to responses. No business rule lives
//! here; a handler that needs a decision delegates to a service.

pub mod auction;
pub mod health;
pub mod offer;
pub mod order;
