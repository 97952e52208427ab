use super::*;

/// Tests cancelling an active auction.
///
/// Expected: Ok(true), status cancelled
#[tokio::test]
async fn cancels_active_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;

    let repo = AuctionRepository::new(db);
    assert!(repo.cancel(auction.id, Utc::now()).await?);

    let stored = repo.find_by_id(auction.id).await?.unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Cancelled);

    Ok(())
}

/// Tests that a terminal auction cannot be cancelled.
///
/// Expected: Ok(false), status still ended
#[tokio::test]
async fn does_not_cancel_ended_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .status(entity::auction::AuctionStatus::Ended)
        .build()
        .await?;

    let repo = AuctionRepository::new(db);
    assert!(!repo.cancel(auction.id, Utc::now()).await?);

    let stored = repo.find_by_id(auction.id).await?.unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Ended);

    Ok(())
}
