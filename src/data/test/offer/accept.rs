use super::*;

/// Tests accepting a pending offer.
///
/// Expected: Ok(true), status accepted
#[tokio::test]
async fn accepts_pending_offer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let buyer = factory::user::create_bidder(db).await?;
    let offer = factory::offer::create_offer(db, vehicle.id, buyer.id).await?;

    let repo = OfferRepository::new(db);
    assert!(repo.accept(offer.id, Utc::now()).await?);

    let stored = repo.find_by_id(offer.id).await?.unwrap();
    assert_eq!(stored.status, entity::offer::OfferStatus::Accepted);

    Ok(())
}

/// Tests that two acceptances resolve to a single winner.
///
/// Expected: first Ok(true), second Ok(false)
#[tokio::test]
async fn second_acceptance_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let buyer = factory::user::create_bidder(db).await?;
    let offer = factory::offer::create_offer(db, vehicle.id, buyer.id).await?;

    let repo = OfferRepository::new(db);
    assert!(repo.accept(offer.id, Utc::now()).await?);
    assert!(!repo.accept(offer.id, Utc::now()).await?);

    Ok(())
}

/// Tests that an expired offer cannot be accepted.
///
/// Expected: Ok(false), status still pending
#[tokio::test]
async fn expired_offer_is_not_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let buyer = factory::user::create_bidder(db).await?;
    let offer = factory::offer::OfferFactory::new(db, vehicle.id, buyer.id)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = OfferRepository::new(db);
    assert!(!repo.accept(offer.id, Utc::now()).await?);

    Ok(())
}
