use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_vehicle_table::Vehicle,
    m20260301_000003_create_auction_table::Auction, m20260301_000005_create_offer_table::Offer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string_len_uniq(Order::OrderNumber, 50))
                    .col(integer_null(Order::AuctionId))
                    .col(integer_null(Order::OfferId))
                    .col(integer(Order::BuyerId))
                    .col(integer(Order::SellerId))
                    .col(integer(Order::VehicleId))
                    .col(decimal_len(Order::VehiclePrice, 10, 2))
                    .col(decimal_len(Order::BuyerFee, 10, 2).default(0))
                    .col(decimal_len_null(Order::TransportFee, 10, 2))
                    .col(decimal_len(Order::TitleFee, 10, 2).default(0))
                    .col(decimal_len(Order::Tax, 10, 2).default(0))
                    .col(decimal_len(Order::Total, 10, 2))
                    .col(string_len(Order::Status, 24).default("pending_payment"))
                    .col(
                        timestamp(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Order::PaidAt))
                    .col(timestamp_null(Order::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_auction_id")
                            .from(Order::Table, Order::AuctionId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_offer_id")
                            .from(Order::Table, Order::OfferId)
                            .to(Offer::Table, Offer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_buyer_id")
                            .from(Order::Table, Order::BuyerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_seller_id")
                            .from(Order::Table, Order::SellerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_vehicle_id")
                            .from(Order::Table, Order::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one order per auction. Offer-sourced orders carry a null
        // auction_id, which the unique index permits any number of times.
        manager
            .create_index(
                Index::create()
                    .name("ux_orders_auction_id")
                    .table(Order::Table)
                    .col(Order::AuctionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    OrderNumber,
    AuctionId,
    OfferId,
    BuyerId,
    SellerId,
    VehicleId,
    VehiclePrice,
    BuyerFee,
    TransportFee,
    TitleFee,
    Tax,
    Total,
    Status,
    CreatedAt,
    PaidAt,
    CompletedAt,
}
