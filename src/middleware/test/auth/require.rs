use super::*;

mod require_role;

/// Tests an empty permission list admits any active account.
///
/// A route that calls `require(&[])` only wants the caller reloaded from the
/// database, with no role constraints.
///
/// Expected: Ok(user)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_customer(db).await?;
    let identity = identity_for(&user);

    let result = AuthGuard::new(db, &identity).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests every listed permission must hold, not just the first.
///
/// The caller owns the restaurant but is not an admin, so a route that
/// demands both ownership and the admin role rejects them.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let identity = identity_for(&owner);

    let result = AuthGuard::new(db, &identity)
        .require(&[
            Permission::OwnsRestaurant(restaurant.id),
            Permission::Role(Role::Admin),
        ])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, owner.id);
        }
        e => panic!("Expected AccessDenied, got: {:?}", e),
    }

    Ok(())
}

/// Tests a token for a deleted account is treated as invalid.
///
/// The claims may be cryptographically sound, but if the user row no longer
/// exists the token no longer names anyone.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn unknown_user_id_is_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_customer(db).await?;
    let mut identity = identity_for(&user);
    identity.claims.sub = user.id + 1000;

    let result = AuthGuard::new(db, &identity).require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken, got: {:?}", e),
    }

    Ok(())
}
