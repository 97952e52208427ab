use crate::{
    error::{domain::DomainError, AppError},
    model::auction::ClosedAuctionResult,
    service::{events::TracingSink, fees::FlatRateTax, order::OrderService},
    service::test::fees,
};
use chrono::Utc;
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod create_order_from_auction;
mod create_order_from_offer;
