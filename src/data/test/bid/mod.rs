use crate::data::bid::BidRepository;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod strongest_ceiling_excluding;
