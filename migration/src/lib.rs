pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_vehicle_table;
mod m20260301_000003_create_auction_table;
mod m20260301_000004_create_bid_table;
mod m20260301_000005_create_offer_table;
mod m20260301_000006_create_order_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_vehicle_table::Migration),
            Box::new(m20260301_000003_create_auction_table::Migration),
            Box::new(m20260301_000004_create_bid_table::Migration),
            Box::new(m20260301_000005_create_offer_table::Migration),
            Box::new(m20260301_000006_create_order_table::Migration),
        ]
    }
}
