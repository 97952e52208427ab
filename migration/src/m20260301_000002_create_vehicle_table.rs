use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::SellerId))
                    .col(string_len(Vehicle::Status, 20).default("draft"))
                    .col(string_len_uniq(Vehicle::Vin, 17))
                    .col(small_integer_null(Vehicle::Year))
                    .col(string_null(Vehicle::Make))
                    .col(string_null(Vehicle::Model))
                    .col(integer_null(Vehicle::Mileage))
                    .col(decimal_len(Vehicle::StartingPrice, 10, 2))
                    .col(decimal_len_null(Vehicle::ReservePrice, 10, 2))
                    .col(decimal_len_null(Vehicle::BuyNowPrice, 10, 2))
                    .col(
                        timestamp(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_seller_id")
                            .from(Vehicle::Table, Vehicle::SellerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_vehicles_status")
                    .table(Vehicle::Table)
                    .col(Vehicle::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    SellerId,
    Status,
    Vin,
    Year,
    Make,
    Model,
    Mileage,
    StartingPrice,
    ReservePrice,
    BuyNowPrice,
    CreatedAt,
}
