use super::*;

/// Tests creating an order for a won auction.
///
/// Verifies the persisted fee components, the derived total, the pending
/// payment status, and the day-scoped order number format.
///
/// Expected: Ok with order number `ORD-YYYYMMDD-0001`
#[tokio::test]
async fn creates_order_with_number_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let buyer = factory::user::create_bidder(db).await?;

    let params = params_for_auction(auction.id, buyer.id, seller.id, vehicle.id);
    let created_at = params.created_at;

    let repo = OrderRepository::new(db);
    let order = repo.create(params).await?;

    assert_eq!(
        order.order_number,
        format!("ORD-{}-0001", created_at.format("%Y%m%d"))
    );
    assert_eq!(order.auction_id, Some(auction.id));
    assert_eq!(order.buyer_id, buyer.id);
    assert_eq!(order.seller_id, seller.id);
    assert_eq!(order.vehicle_price, Decimal::new(20_000, 0));
    assert_eq!(order.buyer_fee, Decimal::new(950, 0));
    assert_eq!(order.transport_fee, None);
    assert_eq!(order.total, Decimal::new(21_025, 0));
    assert_eq!(order.status, entity::order::OrderStatus::PendingPayment);

    Ok(())
}

/// Tests that order numbers count up within a day.
///
/// Expected: second order of the day gets sequence 0002
#[tokio::test]
async fn order_numbers_count_up_within_a_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let (other_seller, other_vehicle, other_auction) =
        factory::helpers::create_active_auction(db).await?;
    let buyer = factory::user::create_bidder(db).await?;

    let repo = OrderRepository::new(db);
    repo.create(params_for_auction(auction.id, buyer.id, seller.id, vehicle.id))
        .await?;
    let second = repo
        .create(params_for_auction(
            other_auction.id,
            buyer.id,
            other_seller.id,
            other_vehicle.id,
        ))
        .await?;

    assert!(second.order_number.ends_with("-0002"));

    Ok(())
}

/// Tests that a second order for the same auction is refused.
///
/// Verifies the unique constraint on `auction_id` surfaces as a database
/// error and leaves only the first order in place.
///
/// Expected: Err on the duplicate
#[tokio::test]
async fn duplicate_auction_order_is_refused() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let buyer = factory::user::create_bidder(db).await?;

    let repo = OrderRepository::new(db);
    let first = repo
        .create(params_for_auction(auction.id, buyer.id, seller.id, vehicle.id))
        .await?;

    let duplicate = repo
        .create(params_for_auction(auction.id, buyer.id, seller.id, vehicle.id))
        .await;
    assert!(duplicate.is_err());

    let stored = repo.find_by_auction_id(auction.id).await?.unwrap();
    assert_eq!(stored.id, first.id);

    Ok(())
}
