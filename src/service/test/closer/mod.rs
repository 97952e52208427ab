use crate::{
    error::AppError,
    service::{closer::AuctionCloser, events::TracingSink, fees::FlatRateTax, order::OrderService},
    service::test::fees,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod sweep_close;
