use super::*;

/// Tests that the sweep settles a due auction with the highest ledger bid.
///
/// Expected: one result carrying the winning bid, winner set on the row
#[tokio::test]
async fn settles_due_auction_with_highest_bid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let now = Utc::now();
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .active()
        .ends_at(now - Duration::minutes(1))
        .build()
        .await?;

    let losing = factory::user::create_bidder(db).await?;
    let winning = factory::user::create_bidder(db).await?;
    factory::bid::create_bid(db, auction.id, losing.id, Decimal::new(10_000, 0)).await?;
    let top = factory::bid::create_bid(db, auction.id, winning.id, Decimal::new(11_000, 0)).await?;

    let closer = AuctionCloser::new(db, &TracingSink);
    let results = closer.sweep_close(now).await?;

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.auction.status, entity::auction::AuctionStatus::Ended);
    assert_eq!(result.auction.winner_id, Some(winning.id));
    assert_eq!(result.winning_bid.as_ref().unwrap().id, top.id);

    Ok(())
}

/// Tests that an auction with an empty ledger closes without a winner.
///
/// Expected: result with no winning bid and no winner on the row
#[tokio::test]
async fn zero_bid_auction_closes_without_winner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let now = Utc::now();
    factory::auction::AuctionFactory::new(db, vehicle.id)
        .active()
        .ends_at(now - Duration::minutes(1))
        .build()
        .await?;

    let closer = AuctionCloser::new(db, &TracingSink);
    let results = closer.sweep_close(now).await?;

    assert_eq!(results.len(), 1);
    assert!(results[0].winning_bid.is_none());
    assert_eq!(results[0].auction.winner_id, None);
    assert_eq!(
        results[0].auction.status,
        entity::auction::AuctionStatus::Ended
    );

    Ok(())
}

/// Tests that a second sweep over the same auctions settles nothing.
///
/// Expected: first sweep one result, second sweep empty
#[tokio::test]
async fn sweep_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let now = Utc::now();
    factory::auction::AuctionFactory::new(db, vehicle.id)
        .active()
        .ends_at(now - Duration::minutes(1))
        .build()
        .await?;

    let closer = AuctionCloser::new(db, &TracingSink);
    assert_eq!(closer.sweep_close(now).await?.len(), 1);
    assert_eq!(closer.sweep_close(now).await?.len(), 0);

    Ok(())
}

/// Tests that a won auction whose order creation failed is settled again.
///
/// Expected: the second sweep re-reports the auction with its winning bid;
/// once an order exists a third sweep reports nothing
#[tokio::test]
async fn resettles_won_auction_missing_its_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let now = Utc::now();
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .active()
        .ends_at(now - Duration::minutes(1))
        .build()
        .await?;

    let winning = factory::user::create_bidder(db).await?;
    let top = factory::bid::create_bid(db, auction.id, winning.id, Decimal::new(11_000, 0)).await?;

    let closer = AuctionCloser::new(db, &TracingSink);

    // First sweep closes the auction; its results are dropped without an
    // order being created, as happens when order creation errors out.
    assert_eq!(closer.sweep_close(now).await?.len(), 1);

    let retried = closer.sweep_close(now).await?;
    assert_eq!(retried.len(), 1);
    assert_eq!(retried[0].auction.id, auction.id);
    assert_eq!(retried[0].auction.winner_id, Some(winning.id));
    assert_eq!(retried[0].winning_bid.as_ref().unwrap().id, top.id);

    let schedule = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    OrderService::new(db, &schedule, &tax, &TracingSink)
        .create_order_from_auction(&retried[0], now)
        .await?;

    assert_eq!(closer.sweep_close(now).await?.len(), 0);

    Ok(())
}

/// Tests that the activation pass flips due scheduled auctions.
///
/// Expected: one activation, auction active afterwards
#[tokio::test]
async fn activates_due_scheduled_auctions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let now = Utc::now();
    let auction = factory::auction::AuctionFactory::new(db, vehicle.id)
        .starts_at(now - Duration::minutes(1))
        .build()
        .await?;

    let closer = AuctionCloser::new(db, &TracingSink);
    assert_eq!(closer.activate_due(now).await?, 1);

    let stored = crate::data::auction::AuctionRepository::new(db)
        .find_by_id(auction.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, entity::auction::AuctionStatus::Active);

    Ok(())
}
