//! Offer factory for the "make an offer" purchase path.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test offers. Defaults to a pending offer of
/// 9,000.00 expiring in two days.
pub struct OfferFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    user_id: i32,
    amount: Decimal,
    status: entity::offer::OfferStatus,
    expires_at: DateTime<Utc>,
}

impl<'a> OfferFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32, user_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            user_id,
            amount: Decimal::new(9_000_00, 2),
            status: entity::offer::OfferStatus::Pending,
            expires_at: Utc::now() + Duration::days(2),
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: entity::offer::OfferStatus) -> Self {
        self.status = status;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::offer::Model, DbErr> {
        let now = Utc::now();
        entity::offer::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            status: ActiveValue::Set(self.status),
            counter_amount: ActiveValue::Set(None),
            message: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending offer with default values.
pub async fn create_offer(
    db: &DatabaseConnection,
    vehicle_id: i32,
    user_id: i32,
) -> Result<entity::offer::Model, DbErr> {
    OfferFactory::new(db, vehicle_id, user_id).build().await
}
