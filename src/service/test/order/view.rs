use super::*;

/// Tests who may read an order.
///
/// The ordering customer, the restaurant's owner, and an admin all see it.
/// An unrelated customer gets a 403.
///
/// Expected: Ok for the three parties, Err(AccessDenied) for the stranger
#[tokio::test]
async fn order_is_visible_to_its_parties_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    let stranger = factory::create_customer(db).await?;
    let service = OrderService::new(db);

    for user in [&customer, &owner, &admin] {
        let loaded = service.get(order.id, user).await?;
        assert_eq!(loaded.id, order.id);
    }

    let result = service.get(order.id, &stranger).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}

/// Tests tracking history is gated the same way as the order itself.
///
/// Expected: Ok for the customer, Err(AccessDenied) for a stranger
#[tokio::test]
async fn tracking_uses_same_access_rules() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let stranger = factory::create_customer(db).await?;
    let service = OrderService::new(db);

    let tracking = service.get_tracking(order.id, &customer).await?;
    assert_eq!(tracking.len(), 1);

    let result = service.get_tracking(order.id, &stranger).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}

/// Tests a missing order is a 404 before any access check.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_order_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let result = OrderService::new(db).get(9999, &customer).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));

    Ok(())
}
