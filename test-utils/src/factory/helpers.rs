//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique identifiers in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a seller, an active vehicle listing, and an active auction over
/// it, all with default values.
///
/// The auction started an hour ago and ends in an hour, so bids placed at
/// `Utc::now()` are inside the bidding window.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((seller, vehicle, auction))` - Created entities
/// - `Err(DbErr)` - Database error
pub async fn create_active_auction(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::auction::Model,
    ),
    DbErr,
> {
    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .active()
        .build()
        .await?;

    Ok((seller, vehicle, auction))
}
