use crate::{
    data::order::OrderRepository,
    model::order::{CreateOrderParams, OrderSource},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

/// Order parameters for a won auction with round fee numbers.
fn params_for_auction(
    auction_id: i32,
    buyer_id: i32,
    seller_id: i32,
    vehicle_id: i32,
) -> CreateOrderParams {
    CreateOrderParams {
        source: OrderSource::Auction(auction_id),
        buyer_id,
        seller_id,
        vehicle_id,
        vehicle_price: Decimal::new(20_000, 0),
        buyer_fee: Decimal::new(950, 0),
        title_fee: Decimal::new(75, 0),
        tax: Decimal::ZERO,
        created_at: Utc::now(),
    }
}
