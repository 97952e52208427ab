//! Vehicle factory for creating test vehicle listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Defaults to an `active` listing with a starting price of 10,000.00.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    seller_id: i32,
    status: entity::vehicle::VehicleStatus,
    vin: String,
    starting_price: Decimal,
    reserve_price: Option<Decimal>,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - status: `Active`
    /// - vin: unique 17-character value derived from the test counter
    /// - starting_price: `10000.00`
    /// - reserve_price: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `seller_id` - ID of the user selling the vehicle
    pub fn new(db: &'a DatabaseConnection, seller_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            seller_id,
            status: entity::vehicle::VehicleStatus::Active,
            vin: format!("{:0>17}", id),
            starting_price: Decimal::new(10_000_00, 2),
            reserve_price: None,
        }
    }

    pub fn status(mut self, status: entity::vehicle::VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn starting_price(mut self, starting_price: Decimal) -> Self {
        self.starting_price = starting_price;
        self
    }

    pub fn reserve_price(mut self, reserve_price: Option<Decimal>) -> Self {
        self.reserve_price = reserve_price;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            seller_id: ActiveValue::Set(self.seller_id),
            status: ActiveValue::Set(self.status),
            vin: ActiveValue::Set(self.vin),
            year: ActiveValue::Set(Some(2019)),
            make: ActiveValue::Set(Some("Toyota".to_string())),
            model: ActiveValue::Set(Some("Camry".to_string())),
            mileage: ActiveValue::Set(Some(60_000)),
            starting_price: ActiveValue::Set(self.starting_price),
            reserve_price: ActiveValue::Set(self.reserve_price),
            buy_now_price: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active vehicle with default values.
///
/// Shorthand for `VehicleFactory::new(db, seller_id).build().await`.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    seller_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, seller_id).build().await
}
