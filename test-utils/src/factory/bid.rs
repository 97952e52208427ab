//! Bid factory for seeding auction bid ledgers in tests.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting bid ledger rows directly, bypassing validation.
///
/// Use this to arrange ledger states for repository and closer tests; bids
/// placed through the engine should go through the service instead.
pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    auction_id: i32,
    user_id: i32,
    amount: Decimal,
    max_bid: Option<Decimal>,
    is_auto_bid: bool,
    created_at: DateTime<Utc>,
}

impl<'a> BidFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, auction_id: i32, user_id: i32, amount: Decimal) -> Self {
        Self {
            db,
            auction_id,
            user_id,
            amount,
            max_bid: None,
            is_auto_bid: false,
            created_at: Utc::now(),
        }
    }

    pub fn max_bid(mut self, max_bid: Option<Decimal>) -> Self {
        self.max_bid = max_bid;
        self
    }

    pub fn auto_bid(mut self, is_auto_bid: bool) -> Self {
        self.is_auto_bid = is_auto_bid;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            auction_id: ActiveValue::Set(self.auction_id),
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            max_bid: ActiveValue::Set(self.max_bid),
            is_auto_bid: ActiveValue::Set(self.is_auto_bid),
            ip_address: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a bid ledger row with default values.
pub async fn create_bid(
    db: &DatabaseConnection,
    auction_id: i32,
    user_id: i32,
    amount: Decimal,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, auction_id, user_id, amount).build().await
}
