use super::*;

/// Tests that the current leader's own ceiling is not a counter candidate.
///
/// Expected: Ok(None) when only the excluded user holds a ceiling
#[tokio::test]
async fn excludes_the_leader() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let leader = factory::user::create_bidder(db).await?;

    factory::bid::BidFactory::new(db, auction.id, leader.id, Decimal::new(10_000, 0))
        .max_bid(Some(Decimal::new(15_000, 0)))
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let candidate = repo
        .strongest_ceiling_excluding(auction.id, leader.id, Decimal::new(10_000, 0))
        .await?;

    assert!(candidate.is_none());

    Ok(())
}

/// Tests that exhausted ceilings are not candidates.
///
/// Expected: Ok(None) when the only other ceiling is at or below the floor
#[tokio::test]
async fn ignores_ceilings_at_or_below_the_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let leader = factory::user::create_bidder(db).await?;
    let rival = factory::user::create_bidder(db).await?;

    factory::bid::BidFactory::new(db, auction.id, rival.id, Decimal::new(10_000, 0))
        .max_bid(Some(Decimal::new(12_000, 0)))
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let candidate = repo
        .strongest_ceiling_excluding(auction.id, leader.id, Decimal::new(12_000, 0))
        .await?;

    assert!(candidate.is_none());

    Ok(())
}

/// Tests that equal ceilings resolve to the one registered first.
///
/// Expected: the earlier of two equal live ceilings
#[tokio::test]
async fn equal_ceilings_resolve_to_earlier_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_seller, _vehicle, auction) = factory::helpers::create_active_auction(db).await?;
    let leader = factory::user::create_bidder(db).await?;
    let first_rival = factory::user::create_bidder(db).await?;
    let second_rival = factory::user::create_bidder(db).await?;

    let now = Utc::now();
    let earlier = factory::bid::BidFactory::new(db, auction.id, first_rival.id, Decimal::new(10_000, 0))
        .max_bid(Some(Decimal::new(14_000, 0)))
        .created_at(now - Duration::seconds(30))
        .build()
        .await?;
    factory::bid::BidFactory::new(db, auction.id, second_rival.id, Decimal::new(10_100, 0))
        .max_bid(Some(Decimal::new(14_000, 0)))
        .created_at(now)
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let candidate = repo
        .strongest_ceiling_excluding(auction.id, leader.id, Decimal::new(10_100, 0))
        .await?
        .unwrap();

    assert_eq!(candidate.id, earlier.id);

    Ok(())
}
