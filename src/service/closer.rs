use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::{auction::AuctionRepository, bid::BidRepository},
    error::AppError,
    model::auction::ClosedAuctionResult,
    service::events::EventSink,
};

/// Drives scheduled auctions into and out of their live window.
pub struct AuctionCloser<'a> {
    db: &'a DatabaseConnection,
    events: &'a dyn EventSink,
}

impl<'a> AuctionCloser<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a dyn EventSink) -> Self {
        Self { db, events }
    }

    /// Activates every scheduled auction whose start time has passed.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of auctions this sweep activated
    /// - `Err(AppError)`: Database error
    pub async fn activate_due(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let repo = AuctionRepository::new(self.db);

        let mut activated = 0;
        for auction in repo.find_due_for_activation(now).await? {
            if repo.activate(auction.id, now).await? {
                info!(auction_id = auction.id, "auction activated");
                activated += 1;
            }
        }

        Ok(activated)
    }

    /// Closes every active auction whose end time has passed.
    ///
    /// Each close flips the status first; only the sweep that wins that
    /// conditional update reads the ledger and assigns the winner, so
    /// overlapping sweeps close each auction exactly once. The ledger is
    /// read after the flip, when no further bid can land, so the winning
    /// bid is final.
    ///
    /// Ended auctions with a winner whose order never materialized (order
    /// creation failed after the flip) are reported again at the head of
    /// the results, until an order exists; the one-order-per-auction
    /// constraint keeps the repeat harmless.
    ///
    /// # Returns
    /// - `Ok(results)`: One entry per auction awaiting settlement, winner or not
    /// - `Err(AppError)`: Database error
    pub async fn sweep_close(&self, now: DateTime<Utc>) -> Result<Vec<ClosedAuctionResult>, AppError> {
        let auctions = AuctionRepository::new(self.db);
        let bids = BidRepository::new(self.db);

        let mut results = Vec::new();

        for auction in auctions.find_ended_unsettled().await? {
            let winning_bid = bids.highest_for_auction(auction.id).await?;

            info!(auction_id = auction.id, "retrying settlement for ended auction");
            results.push(ClosedAuctionResult {
                auction,
                winning_bid,
            });
        }

        for due in auctions.find_due_for_close(now).await? {
            if !auctions.close(due.id, now).await? {
                continue;
            }

            let winning_bid = bids.highest_for_auction(due.id).await?;

            let auction = match &winning_bid {
                Some(bid) => auctions.set_winner(due.id, bid.user_id, now).await?,
                None => auctions
                    .find_by_id(due.id)
                    .await?
                    .ok_or(sea_orm::DbErr::RecordNotFound(format!(
                        "Auction {} not found",
                        due.id
                    )))?,
            };

            self.events.auction_ended(
                auction.id,
                auction.winner_id,
                auction.current_bid,
            );
            info!(
                auction_id = auction.id,
                winner_id = auction.winner_id,
                "auction closed"
            );

            results.push(ClosedAuctionResult {
                auction,
                winning_bid,
            });
        }

        Ok(results)
    }
}
