use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    config::FeeSchedule,
    data::{
        offer::OfferRepository, order::OrderRepository, vehicle::VehicleRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        auction::ClosedAuctionResult,
        order::{CreateOrderParams, OrderDto, OrderSource},
    },
    service::{events::EventSink, fees::TaxPolicy},
};

/// Turns settled sales into purchase orders.
///
/// The factory is the single place fee math happens: price, buyer premium,
/// title fee, and tax are computed once here and frozen on the order row.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    fees: &'a FeeSchedule,
    tax: &'a dyn TaxPolicy,
    events: &'a dyn EventSink,
}

impl<'a> OrderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        fees: &'a FeeSchedule,
        tax: &'a dyn TaxPolicy,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            db,
            fees,
            tax,
            events,
        }
    }

    /// Creates the order for a closed auction.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created order
    /// - `Err(AppError::DomainErr(NoWinner))`: The auction ended with no bids
    /// - `Err(AppError::Conflict)`: An order for this auction already exists
    pub async fn create_order_from_auction(
        &self,
        result: &ClosedAuctionResult,
        now: DateTime<Utc>,
    ) -> Result<entity::order::Model, AppError> {
        let auction = &result.auction;

        let winning_bid = result.winning_bid.as_ref().ok_or(DomainError::NoWinner {
            auction_id: auction.id,
        })?;

        let vehicle = VehicleRepository::new(self.db)
            .find_by_id(auction.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        self.create_order(
            OrderSource::Auction(auction.id),
            winning_bid.user_id,
            &vehicle,
            winning_bid.amount,
            now,
        )
        .await
    }

    /// Accepts a pending offer and creates its order.
    ///
    /// The acceptance is a conditional flip on the offer row, so two racing
    /// acceptances produce one order; the loser sees the transition refusal.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created order
    /// - `Err(AppError::DomainErr(InvalidTransition))`: Offer no longer pending, or expired
    /// - `Err(AppError::NotFound)`: No such offer
    pub async fn create_order_from_offer(
        &self,
        offer_id: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::order::Model, AppError> {
        let offers = OfferRepository::new(self.db);

        let offer = offers
            .find_by_id(offer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        if !offers.accept(offer_id, now).await? {
            let status = if offer.is_expired(now) {
                "expired"
            } else {
                offers
                    .find_by_id(offer_id)
                    .await?
                    .map(|o| o.status.as_str())
                    .unwrap_or(offer.status.as_str())
            };

            return Err(DomainError::InvalidTransition {
                action: "accept offer",
                status,
            }
            .into());
        }

        let vehicle = VehicleRepository::new(self.db)
            .find_by_id(offer.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        self.create_order(
            OrderSource::Offer(offer.id),
            offer.user_id,
            &vehicle,
            offer.amount,
            now,
        )
        .await
    }

    /// Gets an order, visible only to its buyer, its seller, or an admin
    pub async fn get_for_user(
        &self,
        id: i32,
        user: &entity::user::Model,
    ) -> Result<OrderDto, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if order.buyer_id != user.id && order.seller_id != user.id && !user.admin {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(OrderDto::from_entity(order))
    }

    /// Gets all orders where the user is the buyer, newest first
    pub async fn list_for_buyer(
        &self,
        user: &entity::user::Model,
    ) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db).list_for_buyer(user.id).await?;

        Ok(orders.into_iter().map(OrderDto::from_entity).collect())
    }

    async fn create_order(
        &self,
        source: OrderSource,
        buyer_id: i32,
        vehicle: &entity::vehicle::Model,
        vehicle_price: rust_decimal::Decimal,
        now: DateTime<Utc>,
    ) -> Result<entity::order::Model, AppError> {
        let buyer_fee = self.fees.buyer_fee(vehicle_price);
        let tax = self.tax.tax_for(vehicle_price, buyer_fee);

        let params = CreateOrderParams {
            source,
            buyer_id,
            seller_id: vehicle.seller_id,
            vehicle_id: vehicle.id,
            vehicle_price,
            buyer_fee,
            title_fee: self.fees.title_fee,
            tax,
            created_at: now,
        };

        let order = match OrderRepository::new(self.db).create(params).await {
            Ok(order) => order,
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return Err(AppError::Conflict(
                        "An order already exists for this sale.".to_string(),
                    ));
                }
                return Err(err.into());
            }
        };

        VehicleRepository::new(self.db).mark_sold(vehicle.id).await?;

        self.events
            .order_created(order.id, &order.order_number, order.auction_id);

        Ok(order)
    }
}
