use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, sea_query::Expr,
};

use entity::offer::{Column, OfferStatus};

pub struct OfferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an offer by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find_by_id(id).one(self.db).await
    }

    /// Flips a pending offer to accepted.
    ///
    /// Conditional on the current status so two acceptances, or an
    /// acceptance racing an expiry sweep, resolve to a single winner.
    ///
    /// # Returns
    /// - `Ok(true)`: This call accepted the offer
    /// - `Ok(false)`: The offer was no longer pending
    /// - `Err(DbErr)`: Database error
    pub async fn accept(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Offer::update_many()
            .col_expr(Column::Status, Expr::value(OfferStatus::Accepted))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(OfferStatus::Pending))
            .filter(Column::ExpiresAt.gt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
