use super::*;

/// Tests the order factory on a won auction.
///
/// With a $20,000 winning bid the 4.75% tier applies: $950 premium, $75
/// title fee, no tax, for a $21,025 total. The vehicle is marked sold.
///
/// Expected: Ok with frozen fee components and the vehicle sold
#[tokio::test]
async fn creates_order_with_computed_fees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let winner = factory::user::create_bidder(db).await?;
    let winning_bid =
        factory::bid::create_bid(db, auction.id, winner.id, Decimal::new(20_000, 0)).await?;

    let fees = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    let service = OrderService::new(db, &fees, &tax, &TracingSink);

    let order = service
        .create_order_from_auction(
            &ClosedAuctionResult {
                auction,
                winning_bid: Some(winning_bid),
            },
            Utc::now(),
        )
        .await?;

    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.buyer_id, winner.id);
    assert_eq!(order.seller_id, seller.id);
    assert_eq!(order.vehicle_price, Decimal::new(20_000, 0));
    assert_eq!(order.buyer_fee, Decimal::new(950, 0));
    assert_eq!(order.title_fee, Decimal::new(75, 0));
    assert_eq!(order.tax, Decimal::ZERO);
    assert_eq!(order.total, Decimal::new(21_025, 0));
    assert_eq!(order.status, entity::order::OrderStatus::PendingPayment);

    let stored_vehicle = crate::data::vehicle::VehicleRepository::new(db)
        .find_by_id(vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored_vehicle.status, entity::vehicle::VehicleStatus::Sold);

    Ok(())
}

/// Tests that the premium floor applies to cheap vehicles.
///
/// 5% of $3,000 is $150, under the $250 floor.
///
/// Expected: buyer fee of $250
#[tokio::test]
async fn buyer_fee_is_floored() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let winner = factory::user::create_bidder(db).await?;
    let winning_bid =
        factory::bid::create_bid(db, auction.id, winner.id, Decimal::new(3_000, 0)).await?;

    let fees = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    let service = OrderService::new(db, &fees, &tax, &TracingSink);

    let order = service
        .create_order_from_auction(
            &ClosedAuctionResult {
                auction,
                winning_bid: Some(winning_bid),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(order.buyer_fee, Decimal::new(250, 0));

    Ok(())
}

/// Tests that an auction without a winning bid produces no order.
///
/// Expected: NoWinner naming the auction
#[tokio::test]
async fn refuses_auction_without_winner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let auction_id = auction.id;

    let fees = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    let service = OrderService::new(db, &fees, &tax, &TracingSink);

    let err = service
        .create_order_from_auction(
            &ClosedAuctionResult {
                auction,
                winning_bid: None,
            },
            Utc::now(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DomainErr(DomainError::NoWinner { auction_id: id }) if id == auction_id
    ));

    Ok(())
}

/// Tests that a second settlement of the same auction is refused.
///
/// Expected: Conflict on the duplicate
#[tokio::test]
async fn duplicate_settlement_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let winner = factory::user::create_bidder(db).await?;
    let winning_bid =
        factory::bid::create_bid(db, auction.id, winner.id, Decimal::new(20_000, 0)).await?;

    let result = ClosedAuctionResult {
        auction,
        winning_bid: Some(winning_bid),
    };

    let fees = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    let service = OrderService::new(db, &fees, &tax, &TracingSink);

    service.create_order_from_auction(&result, Utc::now()).await?;
    let err = service
        .create_order_from_auction(&result, Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
