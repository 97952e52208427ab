use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_vehicle_table::Vehicle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(pk_auto(Auction::Id))
                    .col(integer_uniq(Auction::VehicleId))
                    .col(string_len(Auction::AuctionType, 20).default("timed"))
                    .col(string_len(Auction::Status, 20).default("scheduled"))
                    .col(timestamp(Auction::StartsAt))
                    .col(timestamp(Auction::EndsAt))
                    .col(small_integer(Auction::ExtendedCount).default(0))
                    .col(decimal_len(Auction::CurrentBid, 10, 2).default(0))
                    .col(integer(Auction::BidCount).default(0))
                    .col(integer_null(Auction::CurrentBidUserId))
                    .col(integer_null(Auction::WinnerId))
                    .col(
                        timestamp(Auction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Auction::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_vehicle_id")
                            .from(Auction::Table, Auction::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_winner_id")
                            .from(Auction::Table, Auction::WinnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_auctions_status")
                    .table(Auction::Table)
                    .col(Auction::Status)
                    .to_owned(),
            )
            .await?;

        // The close sweep scans by end time.
        manager
            .create_index(
                Index::create()
                    .name("ix_auctions_ends_at")
                    .table(Auction::Table)
                    .col(Auction::EndsAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Auction {
    Table,
    Id,
    VehicleId,
    AuctionType,
    Status,
    StartsAt,
    EndsAt,
    ExtendedCount,
    CurrentBid,
    BidCount,
    CurrentBidUserId,
    WinnerId,
    CreatedAt,
    UpdatedAt,
}
