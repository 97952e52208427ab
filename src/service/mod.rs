//! Business logic layer.
//!
//! Services sit between the HTTP controllers and the repository layer. They
//! own the auction lifecycle rules: bid validation, state transitions, the
//! close sweep, proxy-bid resolution, and order creation. Services hold no
//! mutable state of their own; every race-sensitive write is delegated to a
//! conditional update in the data layer.

pub mod auction;
pub mod bid_rules;
pub mod closer;
pub mod events;
pub mod fees;
pub mod order;

#[cfg(test)]
pub mod test;
