use chrono::{Days, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::order::{CreateOrderParams, OrderSource};
use entity::order::{Column, OrderStatus};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order in `pending_payment` with a freshly assigned order
    /// number.
    ///
    /// The order number is `ORD-YYYYMMDD-NNNN` where `NNNN` counts orders
    /// created that day; numbering and insert happen in one transaction, and
    /// the unique constraints on `order_number` and `auction_id` turn any
    /// race into a `DbErr` the caller can map.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created order
    /// - `Err(DbErr)`: Database error, including unique violations when an
    ///   order for the same auction already exists
    pub async fn create(&self, params: CreateOrderParams) -> Result<entity::order::Model, DbErr> {
        let txn = self.db.begin().await?;

        let day_start = params
            .created_at
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let day_end = day_start + Days::new(1);

        let created_today = entity::prelude::Order::find()
            .filter(Column::CreatedAt.gte(day_start))
            .filter(Column::CreatedAt.lt(day_end))
            .count(&txn)
            .await?;

        let order_number = format!(
            "ORD-{}-{:04}",
            params.created_at.format("%Y%m%d"),
            created_today + 1
        );

        let (auction_id, offer_id) = match params.source {
            OrderSource::Auction(id) => (Some(id), None),
            OrderSource::Offer(id) => (None, Some(id)),
        };

        let order = entity::order::ActiveModel {
            order_number: ActiveValue::Set(order_number),
            auction_id: ActiveValue::Set(auction_id),
            offer_id: ActiveValue::Set(offer_id),
            buyer_id: ActiveValue::Set(params.buyer_id),
            seller_id: ActiveValue::Set(params.seller_id),
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            vehicle_price: ActiveValue::Set(params.vehicle_price),
            buyer_fee: ActiveValue::Set(params.buyer_fee),
            transport_fee: ActiveValue::Set(None),
            title_fee: ActiveValue::Set(params.title_fee),
            tax: ActiveValue::Set(params.tax),
            total: ActiveValue::Set(params.total()),
            status: ActiveValue::Set(OrderStatus::PendingPayment),
            created_at: ActiveValue::Set(params.created_at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Gets an order by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets the order created for an auction, if any
    pub async fn find_by_auction_id(
        &self,
        auction_id: i32,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(Column::AuctionId.eq(auction_id))
            .one(self.db)
            .await
    }

    /// Gets all orders for a buyer, newest first
    pub async fn list_for_buyer(
        &self,
        buyer_id: i32,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(Column::BuyerId.eq(buyer_id))
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await
    }
}
