//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign-key dependencies so tests stay
//! concise.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let seller = factory::user::create_user(&db).await?;
//!
//! // Customize through the builder
//! let bidder = factory::user::UserFactory::new(&db)
//!     .verified(true)
//!     .with_payment_method(true)
//!     .build()
//!     .await?;
//!
//! // Or set up a whole auction in one call
//! let (seller, vehicle, auction) = factory::helpers::create_active_auction(&db).await?;
//! ```

pub mod auction;
pub mod bid;
pub mod helpers;
pub mod offer;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use auction::create_auction;
pub use bid::create_bid;
pub use offer::create_offer;
pub use user::{create_bidder, create_user};
pub use vehicle::create_vehicle;
