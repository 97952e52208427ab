use super::*;

/// Tests accepting a pending offer through the order factory.
///
/// Expected: offer accepted, order created at the offer amount, vehicle sold
#[tokio::test]
async fn accepts_offer_and_creates_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let buyer = factory::user::create_bidder(db).await?;
    let offer = factory::offer::OfferFactory::new(db, vehicle.id, buyer.id)
        .amount(Decimal::new(9_500, 0))
        .build()
        .await?;

    let fees = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    let service = OrderService::new(db, &fees, &tax, &TracingSink);

    let order = service.create_order_from_offer(offer.id, Utc::now()).await?;

    assert_eq!(order.offer_id, Some(offer.id));
    assert_eq!(order.auction_id, None);
    assert_eq!(order.buyer_id, buyer.id);
    assert_eq!(order.vehicle_price, Decimal::new(9_500, 0));
    // 5% tier applies under 10k
    assert_eq!(order.buyer_fee, Decimal::new(475, 0));

    let stored_vehicle = crate::data::vehicle::VehicleRepository::new(db)
        .find_by_id(vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored_vehicle.status, entity::vehicle::VehicleStatus::Sold);

    Ok(())
}

/// Tests that a second acceptance of the same offer is refused.
///
/// Expected: InvalidTransition on the duplicate
#[tokio::test]
async fn second_acceptance_is_refused() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, seller.id).await?;
    let buyer = factory::user::create_bidder(db).await?;
    let offer = factory::offer::create_offer(db, vehicle.id, buyer.id).await?;

    let fees = fees();
    let tax = FlatRateTax::new(Decimal::ZERO);
    let service = OrderService::new(db, &fees, &tax, &TracingSink);

    service.create_order_from_offer(offer.id, Utc::now()).await?;
    let err = service
        .create_order_from_offer(offer.id, Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DomainErr(DomainError::InvalidTransition {
            action: "accept offer",
            ..
        })
    ));

    Ok(())
}
