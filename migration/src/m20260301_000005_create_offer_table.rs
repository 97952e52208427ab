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
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(integer(Offer::VehicleId))
                    .col(integer(Offer::UserId))
                    .col(decimal_len(Offer::Amount, 10, 2))
                    .col(string_len(Offer::Status, 20).default("pending"))
                    .col(decimal_len_null(Offer::CounterAmount, 10, 2))
                    .col(text_null(Offer::Message))
                    .col(timestamp(Offer::ExpiresAt))
                    .col(
                        timestamp(Offer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Offer::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_vehicle_id")
                            .from(Offer::Table, Offer::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_user_id")
                            .from(Offer::Table, Offer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    VehicleId,
    UserId,
    Amount,
    Status,
    CounterAmount,
    Message,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
