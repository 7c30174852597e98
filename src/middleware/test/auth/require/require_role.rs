use super::*;

/// Tests an admin passes an admin-only check.
///
/// Expected: Ok(user) with the admin role
#[tokio::test]
async fn grants_access_to_matching_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    let identity = identity_for(&admin);

    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await;

    let user = result.unwrap();
    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a customer is denied an admin-only route.
///
/// Roles match exactly; there is no hierarchy under which some other role
/// implies admin rights.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let identity = identity_for(&customer);

    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, customer.id);
            assert!(message.contains("admin"));
        }
        e => panic!("Expected AccessDenied, got: {:?}", e),
    }

    Ok(())
}

/// Tests the stale role in the token does not matter.
///
/// The guard authorizes against the database row, so a caller whose token
/// still says customer is admitted if an admin has since promoted them.
///
/// Expected: Ok(user) despite the outdated claims
#[tokio::test]
async fn role_comes_from_database_not_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    let mut identity = identity_for(&admin);
    identity.claims.role = Role::Customer.as_str().to_string();

    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests `AnyRole` admits every listed role and nothing else.
///
/// Expected: owner and admin pass, customer is denied
#[tokio::test]
async fn any_role_checks_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;

    let allowed: &[Role] = &[Role::RestaurantOwner, Role::Admin];

    for user in [&owner, &admin] {
        let identity = identity_for(user);
        let result = AuthGuard::new(db, &identity)
            .require(&[Permission::AnyRole(allowed)])
            .await;
        assert!(result.is_ok());
    }

    let identity = identity_for(&customer);
    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::AnyRole(allowed)])
        .await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}
