use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    config::AuctionRules,
    data::{
        auction::{AuctionRepository, RecordBidOutcome},
        bid::BidRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        auction::{
            AuctionDetailDto, AuctionSummaryDto, PaginatedAuctionsDto, PlaceBidResponseDto,
            RecordBidParams,
        },
        bid::BidDto,
    },
    service::{bid_rules, events::EventSink},
};

/// What the bidder asked for: a one-shot bid at a fixed amount, or a proxy
/// ceiling the engine bids up to on their behalf.
#[derive(Clone, Copy)]
enum BidRequest {
    Fixed(Decimal),
    Ceiling(Decimal),
}

pub struct AuctionService<'a> {
    db: &'a DatabaseConnection,
    rules: &'a AuctionRules,
    events: &'a dyn EventSink,
}

impl<'a> AuctionService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        rules: &'a AuctionRules,
        events: &'a dyn EventSink,
    ) -> Self {
        Self { db, rules, events }
    }

    /// Gets a page of active auctions with their vehicles
    pub async fn list_active(
        &self,
        page: u64,
        per_page: u64,
        now: DateTime<Utc>,
    ) -> Result<PaginatedAuctionsDto, AppError> {
        let repo = AuctionRepository::new(self.db);
        let (auctions, total_pages) = repo.find_active_paginated(page, per_page).await?;

        Ok(PaginatedAuctionsDto {
            auctions: auctions
                .into_iter()
                .map(|(auction, vehicle)| AuctionSummaryDto::from_entity(auction, vehicle, now))
                .collect(),
            page,
            total_pages,
        })
    }

    /// Gets one auction with its vehicle
    ///
    /// # Returns
    /// - `Ok(AuctionDetailDto)`: The auction
    /// - `Err(AppError::NotFound)`: No such auction
    pub async fn get_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<AuctionDetailDto, AppError> {
        let repo = AuctionRepository::new(self.db);

        let (auction, vehicle) = repo
            .find_by_id_with_vehicle(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;

        Ok(AuctionDetailDto::from_entity(auction, vehicle, now))
    }

    /// Gets the bid ledger for an auction with bidder identities masked
    pub async fn get_bid_history(&self, auction_id: i32) -> Result<Vec<BidDto>, AppError> {
        let repo = AuctionRepository::new(self.db);
        repo.find_by_id(auction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;

        let bids = BidRepository::new(self.db)
            .ledger_for_auction(auction_id)
            .await?;

        Ok(bids.into_iter().map(BidDto::from_entity).collect())
    }

    /// Places a bid at a fixed amount.
    ///
    /// Validates against a fresh snapshot, then records through a
    /// conditional update keyed on the snapshot's bid count. A lost race
    /// re-reads and re-validates, up to the configured attempt limit; the
    /// re-validation is what keeps the chained-minimum rule honest when two
    /// bidders interleave. An accepted bid may trigger proxy counters and
    /// an anti-snipe extension, both reflected in the response.
    ///
    /// # Returns
    /// - `Ok(PlaceBidResponseDto)`: Bid recorded; auction state after all counters
    /// - `Err(AppError::DomainErr)`: Rejected by the bid rules, or retries exhausted
    /// - `Err(AppError::NotFound)`: No such auction
    pub async fn submit_bid(
        &self,
        bidder: &entity::user::Model,
        auction_id: i32,
        amount: Decimal,
        ip_address: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<PlaceBidResponseDto, AppError> {
        self.place_bid(bidder, auction_id, BidRequest::Fixed(amount), ip_address, now)
            .await
    }

    /// Registers a proxy-bid ceiling.
    ///
    /// The bidder enters at the current minimum acceptable amount (not at
    /// the ceiling); the ceiling rides on the ledger row and later bids by
    /// others are countered automatically up to it. A bidder already in the
    /// lead can raise their ceiling without moving the price.
    pub async fn set_max_bid(
        &self,
        bidder: &entity::user::Model,
        auction_id: i32,
        max_bid: Decimal,
        ip_address: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<PlaceBidResponseDto, AppError> {
        self.place_bid(
            bidder,
            auction_id,
            BidRequest::Ceiling(max_bid),
            ip_address,
            now,
        )
        .await
    }

    /// Cancels an auction that has not yet ended.
    ///
    /// # Returns
    /// - `Ok(())`: Auction cancelled
    /// - `Err(AppError::DomainErr)`: The auction already reached a terminal state
    /// - `Err(AppError::NotFound)`: No such auction
    pub async fn cancel_auction(&self, auction_id: i32, now: DateTime<Utc>) -> Result<(), AppError> {
        let repo = AuctionRepository::new(self.db);

        let auction = repo
            .find_by_id(auction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;

        if repo.cancel(auction_id, now).await? {
            return Ok(());
        }

        // Lost a race against the close sweep or a competing cancel;
        // re-read for the status the refusal should name.
        let status = repo
            .find_by_id(auction_id)
            .await?
            .map(|a| a.status)
            .unwrap_or(auction.status);

        Err(DomainError::InvalidTransition {
            action: "cancel auction",
            status: status.as_str(),
        }
        .into())
    }

    async fn place_bid(
        &self,
        bidder: &entity::user::Model,
        auction_id: i32,
        request: BidRequest,
        ip_address: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<PlaceBidResponseDto, AppError> {
        let auctions = AuctionRepository::new(self.db);

        for attempt in 0..self.rules.max_bid_attempts {
            let (auction, vehicle) = auctions
                .find_by_id_with_vehicle(auction_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;
            let vehicle = vehicle.ok_or_else(|| {
                AppError::InternalError(format!("Auction {} has no vehicle", auction_id))
            })?;

            let (amount, max_bid) = match request {
                BidRequest::Fixed(amount) => {
                    bid_rules::validate(
                        &auction,
                        vehicle.starting_price,
                        bidder,
                        amount,
                        now,
                        self.rules,
                    )?;
                    (amount, None)
                }
                BidRequest::Ceiling(ceiling)
                    if auction.current_bid_user_id == Some(bidder.id) =>
                {
                    // Already leading: the ceiling rides on a ledger row at
                    // the standing price, which stays unchanged.
                    if !auction.is_active(now) {
                        return Err(DomainError::NotActive.into());
                    }
                    if !bidder.can_bid() {
                        return Err(DomainError::NotEligible.into());
                    }
                    if ceiling <= auction.current_bid {
                        return Err(DomainError::BelowMinimum {
                            minimum: auction.current_bid + self.rules.bid_increment,
                        }
                        .into());
                    }
                    (auction.current_bid, Some(ceiling))
                }
                BidRequest::Ceiling(ceiling) => {
                    // The ceiling itself must clear the minimum; entry is at
                    // the minimum, not the ceiling.
                    bid_rules::validate(
                        &auction,
                        vehicle.starting_price,
                        bidder,
                        ceiling,
                        now,
                        self.rules,
                    )?;
                    let entry =
                        bid_rules::minimum_acceptable(&auction, vehicle.starting_price, self.rules);
                    (entry, Some(ceiling))
                }
            };

            let new_ends_at = self.extension_for(&auction, now);
            let outcome = auctions
                .record_bid(RecordBidParams {
                    auction_id,
                    user_id: bidder.id,
                    amount,
                    max_bid,
                    is_auto_bid: false,
                    ip_address: ip_address.clone(),
                    expected_bid_count: auction.bid_count,
                    new_ends_at,
                    bid_time: now,
                })
                .await?;

            match outcome {
                RecordBidOutcome::Recorded { auction, bid } => {
                    self.events
                        .bid_accepted(auction.id, bidder.id, bid.amount, new_ends_at.is_some());

                    let extended_before = auction.extended_count;
                    let auction = self.resolve_proxy_counters(auction, now).await?;

                    return Ok(PlaceBidResponseDto {
                        bid_id: bid.id,
                        amount: bid.amount,
                        current_bid: auction.current_bid,
                        bid_count: auction.bid_count,
                        ends_at: auction.ends_at,
                        extended: new_ends_at.is_some()
                            || auction.extended_count > extended_before,
                    });
                }
                RecordBidOutcome::Conflict => {
                    debug!(auction_id, attempt, "bid lost concurrent update race, retrying");
                }
            }
        }

        Err(DomainError::StorageConflict { auction_id }.into())
    }

    /// Plays out standing proxy ceilings after an accepted bid.
    ///
    /// While a bidder other than the current leader holds a ceiling above
    /// the price, the engine counters for them at the smaller of their
    /// ceiling and price-plus-increment. Equal ceilings resolve in favor of
    /// the one registered first. The loop terminates because every counter
    /// strictly raises the price and ceilings are finite; a conflict means
    /// another writer is active and owns the rest of the resolution.
    async fn resolve_proxy_counters(
        &self,
        mut auction: entity::auction::Model,
        now: DateTime<Utc>,
    ) -> Result<entity::auction::Model, AppError> {
        let auctions = AuctionRepository::new(self.db);
        let bids = BidRepository::new(self.db);

        loop {
            let Some(leader_id) = auction.current_bid_user_id else {
                return Ok(auction);
            };

            let Some(candidate) = bids
                .strongest_ceiling_excluding(auction.id, leader_id, auction.current_bid)
                .await?
            else {
                return Ok(auction);
            };
            let Some(ceiling) = candidate.max_bid else {
                return Ok(auction);
            };

            let counter = ceiling.min(auction.current_bid + self.rules.bid_increment);
            let new_ends_at = self.extension_for(&auction, now);

            let outcome = auctions
                .record_bid(RecordBidParams {
                    auction_id: auction.id,
                    user_id: candidate.user_id,
                    amount: counter,
                    max_bid: Some(ceiling),
                    is_auto_bid: true,
                    ip_address: None,
                    expected_bid_count: auction.bid_count,
                    new_ends_at,
                    bid_time: now,
                })
                .await?;

            match outcome {
                RecordBidOutcome::Recorded {
                    auction: updated,
                    bid,
                } => {
                    self.events.bid_accepted(
                        updated.id,
                        candidate.user_id,
                        bid.amount,
                        new_ends_at.is_some(),
                    );
                    auction = updated;
                }
                RecordBidOutcome::Conflict => {
                    debug!(
                        auction_id = auction.id,
                        "proxy counter lost concurrent update race, yielding"
                    );
                    return Ok(auction);
                }
            }
        }
    }

    /// End time after the anti-snipe rule for a bid landing now, or `None`
    /// when no extension applies.
    fn extension_for(
        &self,
        auction: &entity::auction::Model,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        if auction.extended_count >= self.rules.max_extensions {
            return None;
        }
        if auction.ends_at - now > self.rules.snipe_threshold {
            return None;
        }

        Some(auction.ends_at + self.rules.snipe_extension)
    }
}
