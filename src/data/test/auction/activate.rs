use super::*;

/// Tests activating a scheduled auction.
///
/// Expected: Ok(true), status active
#[tokio::test]
async fn activates_scheduled_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let auction = factory::auction::create_auction(db, vehicle.id).await?;

    let repo = AuctionRepository::new(db);
    assert!(repo.activate(auction.id, Utc::now()).await?);

    let stored = repo.find_by_id(auction.id).await?.unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Active);

    Ok(())
}

/// Tests that activation cannot resurrect a cancelled auction.
///
/// Expected: Ok(false), status still cancelled
#[tokio::test]
async fn does_not_activate_cancelled_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .status(entity::auction::AuctionStatus::Cancelled)
        .build()
        .await?;

    let repo = AuctionRepository::new(db);
    assert!(!repo.activate(auction.id, Utc::now()).await?);

    let stored = repo.find_by_id(auction.id).await?.unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Cancelled);

    Ok(())
}
