//! Domain models and parameter types for order operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sale path an order originates from. Exactly one per order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSource {
    Auction(i32),
    Offer(i32),
}

/// Parameters for creating an order row.
///
/// All fee components are computed by the order factory before this struct
/// is built; the repository only persists them and derives the total.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub source: OrderSource,
    pub buyer_id: i32,
    pub seller_id: i32,
    pub vehicle_id: i32,
    pub vehicle_price: Decimal,
    pub buyer_fee: Decimal,
    pub title_fee: Decimal,
    pub tax: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CreateOrderParams {
    /// Order total at creation time. Transport is not yet quoted at this
    /// point and contributes zero.
    pub fn total(&self) -> Decimal {
        self.vehicle_price + self.buyer_fee + self.title_fee + self.tax
    }
}

/// Order as exposed to its buyer and seller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_number: String,
    pub status: String,
    pub auction_id: Option<i32>,
    pub vehicle_id: i32,
    pub vehicle_price: Decimal,
    pub buyer_fee: Decimal,
    pub transport_fee: Option<Decimal>,
    pub title_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl OrderDto {
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            status: entity.status.as_str().to_string(),
            order_number: entity.order_number,
            auction_id: entity.auction_id,
            vehicle_id: entity.vehicle_id,
            vehicle_price: entity.vehicle_price,
            buyer_fee: entity.buyer_fee,
            transport_fee: entity.transport_fee,
            title_fee: entity.title_fee,
            tax: entity.tax,
            total: entity.total,
            created_at: entity.created_at,
        }
    }
}
