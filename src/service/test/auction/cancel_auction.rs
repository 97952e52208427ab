use super::*;

/// Tests cancelling a running auction.
///
/// Expected: Ok, auction cancelled
#[tokio::test]
async fn cancels_running_auction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;

    let rules = rules();
    let service = AuctionService::new(db, &rules, &TracingSink);
    service.cancel_auction(auction.id, Utc::now()).await?;

    let stored = crate::data::auction::AuctionRepository::new(db)
        .find_by_id(auction.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Cancelled);

    Ok(())
}

/// Tests that cancelling an ended auction is refused, never silently
/// ignored.
///
/// Expected: InvalidTransition naming the terminal status
#[tokio::test]
async fn refuses_to_cancel_ended_auction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .status(entity::auction::AuctionStatus::Ended)
        .build()
        .await?;

    let rules = rules();
    let service = AuctionService::new(db, &rules, &TracingSink);
    let err = service.cancel_auction(auction.id, Utc::now()).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DomainErr(DomainError::InvalidTransition {
            action: "cancel auction",
            status: "ended",
        })
    ));

    Ok(())
}
