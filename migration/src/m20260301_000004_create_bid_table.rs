use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000003_create_auction_table::Auction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(pk_auto(Bid::Id))
                    .col(integer(Bid::AuctionId))
                    .col(integer(Bid::UserId))
                    .col(decimal_len(Bid::Amount, 10, 2))
                    .col(decimal_len_null(Bid::MaxBid, 10, 2))
                    .col(boolean(Bid::IsAutoBid).default(false))
                    .col(string_len_null(Bid::IpAddress, 45))
                    .col(
                        timestamp(Bid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_auction_id")
                            .from(Bid::Table, Bid::AuctionId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_user_id")
                            .from(Bid::Table, Bid::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ledger reads order by amount within an auction.
        manager
            .create_index(
                Index::create()
                    .name("ix_bids_auction_amount")
                    .table(Bid::Table)
                    .col(Bid::AuctionId)
                    .col(Bid::Amount)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bid {
    Table,
    Id,
    AuctionId,
    UserId,
    Amount,
    MaxBid,
    IsAutoBid,
    IpAddress,
    CreatedAt,
}
