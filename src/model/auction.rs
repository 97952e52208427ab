//! Domain models and parameter types for auction operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::vehicle::VehicleSummaryDto;

/// Outcome of closing one due auction, handed to the order factory.
#[derive(Debug, Clone)]
pub struct ClosedAuctionResult {
    /// The auction as it stands after the close: status `ended`, winner set
    /// when a winning bid exists.
    pub auction: entity::auction::Model,
    /// Highest-amount bid (ties broken by earlier creation time), or `None`
    /// for an auction that ended with an empty ledger.
    pub winning_bid: Option<entity::bid::Model>,
}

/// Parameters for recording one accepted bid against an auction.
///
/// `expected_bid_count` is the optimistic-concurrency token: the update
/// only succeeds if the auction row still carries this bid count, so a bid
/// validated against a stale price cannot be recorded.
#[derive(Debug, Clone)]
pub struct RecordBidParams {
    pub auction_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    /// Proxy-bid ceiling carried on the ledger row, if any.
    pub max_bid: Option<Decimal>,
    pub is_auto_bid: bool,
    pub ip_address: Option<String>,
    /// Bid count the validator observed when it accepted this bid.
    pub expected_bid_count: i32,
    /// New end time when the anti-snipe rule fires for this bid.
    pub new_ends_at: Option<DateTime<Utc>>,
    pub bid_time: DateTime<Utc>,
}

/// Auction list entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuctionSummaryDto {
    pub id: i32,
    pub status: String,
    pub current_bid: Decimal,
    pub bid_count: i32,
    pub ends_at: DateTime<Utc>,
    pub time_remaining: i64,
    pub vehicle: Option<VehicleSummaryDto>,
}

impl AuctionSummaryDto {
    pub fn from_entity(
        auction: entity::auction::Model,
        vehicle: Option<entity::vehicle::Model>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: auction.id,
            status: auction.status.as_str().to_string(),
            current_bid: auction.current_bid,
            bid_count: auction.bid_count,
            ends_at: auction.ends_at,
            time_remaining: auction.time_remaining(now),
            vehicle: vehicle.map(VehicleSummaryDto::from_entity),
        }
    }
}

/// Auction detail view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuctionDetailDto {
    pub id: i32,
    pub auction_type: String,
    pub status: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub extended_count: i16,
    pub current_bid: Decimal,
    pub bid_count: i32,
    pub time_remaining: i64,
    pub vehicle: Option<VehicleSummaryDto>,
}

impl AuctionDetailDto {
    pub fn from_entity(
        auction: entity::auction::Model,
        vehicle: Option<entity::vehicle::Model>,
        now: DateTime<Utc>,
    ) -> Self {
        let auction_type = match auction.auction_type {
            entity::auction::AuctionType::Timed => "timed",
            entity::auction::AuctionType::Live => "live",
            entity::auction::AuctionType::BuyNowOnly => "buy_now_only",
            entity::auction::AuctionType::MakeOffer => "make_offer",
        };

        Self {
            id: auction.id,
            auction_type: auction_type.to_string(),
            status: auction.status.as_str().to_string(),
            starts_at: auction.starts_at,
            ends_at: auction.ends_at,
            extended_count: auction.extended_count,
            current_bid: auction.current_bid,
            bid_count: auction.bid_count,
            time_remaining: auction.time_remaining(now),
            vehicle: vehicle.map(VehicleSummaryDto::from_entity),
        }
    }
}

/// Paginated auction listing response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAuctionsDto {
    pub auctions: Vec<AuctionSummaryDto>,
    pub page: u64,
    pub total_pages: u64,
}

/// Request body for placing a bid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceBidDto {
    pub amount: Decimal,
}

/// Request body for setting a proxy-bid ceiling.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetMaxBidDto {
    pub max_bid: Decimal,
}

/// Response to an accepted bid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceBidResponseDto {
    pub bid_id: i32,
    pub amount: Decimal,
    /// Auction price after this bid and any proxy-bid counters it triggered.
    pub current_bid: Decimal,
    pub bid_count: i32,
    pub ends_at: DateTime<Utc>,
    /// Whether the anti-snipe rule extended the auction.
    pub extended: bool,
}
