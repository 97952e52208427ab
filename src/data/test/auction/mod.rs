use crate::{
    data::auction::{AuctionRepository, RecordBidOutcome},
    model::auction::RecordBidParams,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod activate;
mod cancel;
mod close;

/// Record-bid parameters matching the given auction snapshot, with no
/// ceiling and no extension.
fn params_for(auction: &entity::auction::Model, user_id: i32, amount: Decimal) -> RecordBidParams {
    RecordBidParams {
        auction_id: auction.id,
        user_id,
        amount,
        max_bid: None,
        is_auto_bid: false,
        ip_address: None,
        expected_bid_count: auction.bid_count,
        new_ends_at: None,
        bid_time: Utc::now(),
    }
}
