//! Auction factory for creating test auctions.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test auctions with customizable fields.
///
/// The default auction is `scheduled`, starting in one hour and running for
/// one day. Use `active()` for an auction whose bidding window contains
/// `Utc::now()`.
pub struct AuctionFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    status: entity::auction::AuctionStatus,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    current_bid: Decimal,
    bid_count: i32,
    current_bid_user_id: Option<i32>,
    extended_count: i16,
}

impl<'a> AuctionFactory<'a> {
    /// Creates a new AuctionFactory with default values.
    ///
    /// Defaults:
    /// - status: `Scheduled`
    /// - starts_at: 1 hour from now, ends_at: 25 hours from now
    /// - current_bid: `0.00`, bid_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `vehicle_id` - ID of the vehicle being auctioned
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            vehicle_id,
            status: entity::auction::AuctionStatus::Scheduled,
            starts_at: now + Duration::hours(1),
            ends_at: now + Duration::hours(25),
            current_bid: Decimal::ZERO,
            bid_count: 0,
            current_bid_user_id: None,
            extended_count: 0,
        }
    }

    /// Makes the auction active with a bidding window around `Utc::now()`
    /// (started an hour ago, ends in an hour).
    pub fn active(mut self) -> Self {
        let now = Utc::now();
        self.status = entity::auction::AuctionStatus::Active;
        self.starts_at = now - Duration::hours(1);
        self.ends_at = now + Duration::hours(1);
        self
    }

    pub fn status(mut self, status: entity::auction::AuctionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    pub fn ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = ends_at;
        self
    }

    /// Sets the current price and bid count together, as they move together
    /// in real data.
    pub fn with_bids(mut self, current_bid: Decimal, bid_count: i32, high_bidder: i32) -> Self {
        self.current_bid = current_bid;
        self.bid_count = bid_count;
        self.current_bid_user_id = Some(high_bidder);
        self
    }

    pub fn extended_count(mut self, extended_count: i16) -> Self {
        self.extended_count = extended_count;
        self
    }

    /// Builds and inserts the auction entity into the database.
    pub async fn build(self) -> Result<entity::auction::Model, DbErr> {
        let now = Utc::now();
        entity::auction::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            auction_type: ActiveValue::Set(entity::auction::AuctionType::Timed),
            status: ActiveValue::Set(self.status),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            extended_count: ActiveValue::Set(self.extended_count),
            current_bid: ActiveValue::Set(self.current_bid),
            bid_count: ActiveValue::Set(self.bid_count),
            current_bid_user_id: ActiveValue::Set(self.current_bid_user_id),
            winner_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled auction with default values.
///
/// Shorthand for `AuctionFactory::new(db, vehicle_id).build().await`.
pub async fn create_auction(
    db: &DatabaseConnection,
    vehicle_id: i32,
) -> Result<entity::auction::Model, DbErr> {
    AuctionFactory::new(db, vehicle_id).build().await
}
