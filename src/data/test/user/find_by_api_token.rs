use super::*;

/// Tests resolving a user from an API token.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("secret-token")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_api_token("secret-token").await?.unwrap();
    assert_eq!(found.id, user.id);

    Ok(())
}

/// Tests that an unknown token resolves to no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_token_finds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_api_token("nope").await?.is_none());

    Ok(())
}
