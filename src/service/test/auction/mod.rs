use crate::{
    error::{domain::DomainError, AppError},
    service::{auction::AuctionService, events::TracingSink},
    service::test::rules,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod cancel_auction;
