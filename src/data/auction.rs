use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, ExprTrait, Query},
};

use crate::model::auction::RecordBidParams;
use entity::auction::{AuctionStatus, Column};

/// Result of attempting to record a bid against an auction row.
#[derive(Debug)]
pub enum RecordBidOutcome {
    /// The bid was recorded; carries the auction and ledger row after the write.
    Recorded {
        auction: entity::auction::Model,
        bid: entity::bid::Model,
    },
    /// The auction row changed between validation and the write (another bid
    /// landed, or the auction left the active state). Nothing was written.
    Conflict,
}

pub struct AuctionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an auction by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The auction
    /// - `Ok(None)`: Auction not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find_by_id(id).one(self.db).await
    }

    /// Gets an auction by ID together with its vehicle
    pub async fn find_by_id_with_vehicle(
        &self,
        id: i32,
    ) -> Result<Option<(entity::auction::Model, Option<entity::vehicle::Model>)>, DbErr> {
        entity::prelude::Auction::find_by_id(id)
            .find_also_related(entity::prelude::Vehicle)
            .one(self.db)
            .await
    }

    /// Gets paginated active auctions with their vehicles, soonest-ending first
    ///
    /// # Arguments
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((auctions, total_pages))`: Page of auctions and total page count
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::auction::Model, Option<entity::vehicle::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let paginator = entity::prelude::Auction::find()
            .filter(Column::Status.eq(AuctionStatus::Active))
            .order_by_asc(Column::EndsAt)
            .find_also_related(entity::prelude::Vehicle)
            .paginate(self.db, per_page);

        let total_pages = paginator.num_pages().await?;
        let auctions = paginator.fetch_page(page).await?;

        Ok((auctions, total_pages))
    }

    /// Gets scheduled auctions whose start time has passed
    pub async fn find_due_for_activation(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find()
            .filter(Column::Status.eq(AuctionStatus::Scheduled))
            .filter(Column::StartsAt.lte(now))
            .order_by_asc(Column::StartsAt)
            .all(self.db)
            .await
    }

    /// Gets active auctions whose end time has passed
    pub async fn find_due_for_close(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find()
            .filter(Column::Status.eq(AuctionStatus::Active))
            .filter(Column::EndsAt.lte(now))
            .order_by_asc(Column::EndsAt)
            .all(self.db)
            .await
    }

    /// Gets ended auctions that have a winner but no order.
    ///
    /// A settlement is lost when order creation fails (or the process dies)
    /// after the close flip; those auctions are ended, so the due-for-close
    /// scan never sees them again. This query surfaces them until an order
    /// row exists.
    pub async fn find_ended_unsettled(&self) -> Result<Vec<entity::auction::Model>, DbErr> {
        entity::prelude::Auction::find()
            .filter(Column::Status.eq(AuctionStatus::Ended))
            .filter(Column::WinnerId.is_not_null())
            .filter(
                Column::Id.not_in_subquery(
                    Query::select()
                        .column(entity::order::Column::AuctionId)
                        .from(entity::order::Entity)
                        .and_where(entity::order::Column::AuctionId.is_not_null())
                        .to_owned(),
                ),
            )
            .order_by_asc(Column::EndsAt)
            .all(self.db)
            .await
    }

    /// Flips a scheduled auction to active.
    ///
    /// The update is conditional on the current status, so a sweep racing a
    /// cancellation cannot resurrect a cancelled auction.
    ///
    /// # Returns
    /// - `Ok(true)`: This call performed the transition
    /// - `Ok(false)`: The auction was no longer scheduled
    /// - `Err(DbErr)`: Database error
    pub async fn activate(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Auction::update_many()
            .col_expr(Column::Status, Expr::value(AuctionStatus::Active))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(AuctionStatus::Scheduled))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Records one bid: bumps the auction row and appends to the bid ledger
    /// in a single transaction.
    ///
    /// The auction update is conditional on `expected_bid_count` matching the
    /// stored bid count and on the auction still being active. When the
    /// condition fails nothing is written and `Conflict` is returned; the
    /// caller re-reads and re-validates. When `new_ends_at` is set the same
    /// update also extends the auction and bumps `extended_count`.
    ///
    /// # Returns
    /// - `Ok(Recorded { .. })`: Bid recorded; auction and ledger row after the write
    /// - `Ok(Conflict)`: Another writer got there first, nothing written
    /// - `Err(DbErr)`: Database error
    pub async fn record_bid(&self, params: RecordBidParams) -> Result<RecordBidOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let mut update = entity::prelude::Auction::update_many()
            .col_expr(Column::CurrentBid, Expr::value(params.amount))
            .col_expr(Column::BidCount, Expr::col(Column::BidCount).add(1))
            .col_expr(Column::CurrentBidUserId, Expr::value(params.user_id))
            .col_expr(Column::UpdatedAt, Expr::value(params.bid_time))
            .filter(Column::Id.eq(params.auction_id))
            .filter(Column::Status.eq(AuctionStatus::Active))
            .filter(Column::BidCount.eq(params.expected_bid_count));

        if let Some(new_ends_at) = params.new_ends_at {
            update = update
                .col_expr(Column::EndsAt, Expr::value(new_ends_at))
                .col_expr(
                    Column::ExtendedCount,
                    Expr::col(Column::ExtendedCount).add(1),
                );
        }

        let result = update.exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(RecordBidOutcome::Conflict);
        }

        let bid = entity::bid::ActiveModel {
            auction_id: ActiveValue::Set(params.auction_id),
            user_id: ActiveValue::Set(params.user_id),
            amount: ActiveValue::Set(params.amount),
            max_bid: ActiveValue::Set(params.max_bid),
            is_auto_bid: ActiveValue::Set(params.is_auto_bid),
            ip_address: ActiveValue::Set(params.ip_address),
            created_at: ActiveValue::Set(params.bid_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let auction = entity::prelude::Auction::find_by_id(params.auction_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Auction {} not found",
                params.auction_id
            )))?;

        txn.commit().await?;

        Ok(RecordBidOutcome::Recorded { auction, bid })
    }

    /// Flips an active auction to ended.
    ///
    /// This conditional update is the serialization point between the closer
    /// and in-flight bids: once it succeeds, the status filter on
    /// [`Self::record_bid`] rejects every later write, so the ledger read
    /// that follows sees the final set of bids.
    ///
    /// # Returns
    /// - `Ok(true)`: This call ended the auction
    /// - `Ok(false)`: The auction was no longer active (already closed or cancelled)
    /// - `Err(DbErr)`: Database error
    pub async fn close(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Auction::update_many()
            .col_expr(Column::Status, Expr::value(AuctionStatus::Ended))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(AuctionStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the winner on an ended auction
    pub async fn set_winner(
        &self,
        id: i32,
        winner_id: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::auction::Model, DbErr> {
        let auction = entity::prelude::Auction::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Auction {} not found", id)))?;

        let mut active_model: entity::auction::ActiveModel = auction.into();
        active_model.winner_id = ActiveValue::Set(Some(winner_id));
        active_model.updated_at = ActiveValue::Set(now);

        active_model.update(self.db).await
    }

    /// Cancels a scheduled or active auction.
    ///
    /// # Returns
    /// - `Ok(true)`: This call cancelled the auction
    /// - `Ok(false)`: The auction was already ended or cancelled
    /// - `Err(DbErr)`: Database error
    pub async fn cancel(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Auction::update_many()
            .col_expr(Column::Status, Expr::value(AuctionStatus::Cancelled))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(
                Column::Status
                    .is_in([AuctionStatus::Scheduled, AuctionStatus::Active]),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
