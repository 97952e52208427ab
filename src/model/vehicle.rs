use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vehicle summary embedded in auction listings and details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleSummaryDto {
    pub id: i32,
    pub vin: String,
    pub year: Option<i16>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub mileage: Option<i32>,
    pub starting_price: Decimal,
}

impl VehicleSummaryDto {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            vin: entity.vin,
            year: entity.year,
            make: entity.make,
            model: entity.model,
            mileage: entity.mileage,
            starting_price: entity.starting_price,
        }
    }
}
