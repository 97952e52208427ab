use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use entity::bid::Column;

pub struct BidRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BidRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the full bid ledger for an auction, highest amount first with
    /// ties broken by earlier placement
    pub async fn ledger_for_auction(
        &self,
        auction_id: i32,
    ) -> Result<Vec<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find()
            .filter(Column::AuctionId.eq(auction_id))
            .order_by_desc(Column::Amount)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the winning bid for an auction: highest amount, earliest placed
    /// among equals
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The winning bid
    /// - `Ok(None)`: The ledger is empty
    /// - `Err(DbErr)`: Database error
    pub async fn highest_for_auction(
        &self,
        auction_id: i32,
    ) -> Result<Option<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find()
            .filter(Column::AuctionId.eq(auction_id))
            .order_by_desc(Column::Amount)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the strongest standing proxy-bid ceiling on an auction held by
    /// someone other than `exclude_user_id`.
    ///
    /// Only ceilings strictly above `floor` can still counter; among equal
    /// ceilings the one registered first wins, so ordering is ceiling
    /// descending then placement ascending.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Ledger row carrying the strongest live ceiling
    /// - `Ok(None)`: No other bidder holds a ceiling above the floor
    /// - `Err(DbErr)`: Database error
    pub async fn strongest_ceiling_excluding(
        &self,
        auction_id: i32,
        exclude_user_id: i32,
        floor: Decimal,
    ) -> Result<Option<entity::bid::Model>, DbErr> {
        entity::prelude::Bid::find()
            .filter(Column::AuctionId.eq(auction_id))
            .filter(Column::UserId.ne(exclude_user_id))
            .filter(Column::MaxBid.gt(floor))
            .order_by_desc(Column::MaxBid)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
    }
}
