use super::*;

/// Tests closing an active auction.
///
/// Verifies that the conditional update flips the status to ended and
/// reports that this call performed the transition.
///
/// Expected: Ok(true), status ended
#[tokio::test]
async fn closes_active_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;

    let repo = AuctionRepository::new(db);
    let flipped = repo.close(auction.id, Utc::now()).await?;

    assert!(flipped);
    let stored = repo.find_by_id(auction.id).await?.unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Ended);

    Ok(())
}

/// Tests that closing is idempotent across overlapping sweeps.
///
/// Verifies that a second close of the same auction reports that the
/// transition already happened.
///
/// Expected: first close Ok(true), second close Ok(false)
#[tokio::test]
async fn second_close_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;

    let repo = AuctionRepository::new(db);
    assert!(repo.close(auction.id, Utc::now()).await?);
    assert!(!repo.close(auction.id, Utc::now()).await?);

    Ok(())
}

/// Tests that a scheduled auction cannot be closed.
///
/// Expected: Ok(false), status unchanged
#[tokio::test]
async fn scheduled_auction_is_not_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let auction = factory::auction::create_auction(db, vehicle.id).await?;

    let repo = AuctionRepository::new(db);
    assert!(!repo.close(auction.id, Utc::now()).await?);

    let stored = repo.find_by_id(auction.id).await?.unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Scheduled);

    Ok(())
}
