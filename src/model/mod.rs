//! Domain models, operation parameter types, and API DTOs.

pub mod api;
pub mod auction;
pub mod bid;
pub mod order;
pub mod vehicle;
