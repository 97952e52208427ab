use super::*;

/// Tests resolving a valid bearer token to its user.
///
/// Expected: Ok with the token's user
#[tokio::test]
async fn resolves_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("valid-token")
        .build()
        .await?;

    let headers = bearer("valid-token");
    let resolved = AuthGuard::new(db, &headers).require(&[]).await?;
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that a request without an Authorization header is refused.
///
/// Expected: MissingToken
#[tokio::test]
async fn refuses_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let err = AuthGuard::new(db, &headers).require(&[]).await.unwrap_err();

    assert!(matches!(err, AppError::AuthErr(AuthError::MissingToken)));

    Ok(())
}

/// Tests that a token no user carries is refused.
///
/// Expected: InvalidToken
#[tokio::test]
async fn refuses_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let headers = bearer("unknown");
    let err = AuthGuard::new(db, &headers).require(&[]).await.unwrap_err();

    assert!(matches!(err, AppError::AuthErr(AuthError::InvalidToken)));

    Ok(())
}

/// Tests that the admin permission is enforced.
///
/// Expected: AccessDenied for a regular user, Ok for an admin
#[tokio::test]
async fn enforces_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .api_token("user-token")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .api_token("admin-token")
        .admin(true)
        .build()
        .await?;

    let headers = bearer("user-token");
    let err = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    let headers = bearer("admin-token");
    let admin = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;
    assert!(admin.admin);

    Ok(())
}
