use super::*;

/// Tests the restaurant owner can walk an order through the full workflow.
///
/// Every step appends a tracking entry, so a delivered order carries the
/// complete history including the initial `pending` entry.
///
/// Expected: final status `delivered`, 7 tracking entries in order
#[tokio::test]
async fn owner_walks_order_to_delivered() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db);

    for status in [
        "confirmed",
        "preparing",
        "ready_for_pickup",
        "picked_up",
        "on_the_way",
        "delivered",
    ] {
        let updated = service
            .update_status(order.id, &owner, status_dto(status))
            .await?;
        assert_eq!(updated.status, status);
    }

    let tracking = service.get_tracking(order.id, &customer).await?;
    assert_eq!(tracking.len(), 7);
    assert_eq!(tracking[0].status, OrderStatus::Pending.as_str());
    assert_eq!(tracking[6].status, OrderStatus::Delivered.as_str());
    assert_eq!(tracking[6].message, "Order delivered");

    Ok(())
}

/// Tests skipping workflow steps is a conflict.
///
/// `pending` cannot jump straight to `picked_up`; the order stays where it
/// was.
///
/// Expected: Err(AppError::Conflict), status unchanged
#[tokio::test]
async fn skipping_steps_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db);

    let result = service
        .update_status(order.id, &owner, status_dto("picked_up"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    let loaded = service.get(order.id, &owner).await?;
    assert_eq!(loaded.status, OrderStatus::Pending.as_str());

    Ok(())
}

/// Tests cancellation works mid-workflow but not after delivery.
///
/// `cancelled` is reachable from any non-terminal status; `delivered` is
/// terminal, so nothing leaves it.
///
/// Expected: Ok from `preparing`, Err(Conflict) from `delivered`
#[tokio::test]
async fn cancel_only_before_terminal_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db);

    service
        .update_status(order.id, &owner, status_dto("confirmed"))
        .await?;
    service
        .update_status(order.id, &owner, status_dto("preparing"))
        .await?;
    let cancelled = service
        .update_status(order.id, &owner, status_dto("cancelled"))
        .await?;
    assert_eq!(cancelled.status, OrderStatus::Cancelled.as_str());

    let address = factory::create_address(db, customer.id).await?;
    let delivered =
        factory::order::create_delivered_order(db, customer.id, restaurant.id, address.id).await?;
    let result = service
        .update_status(delivered.id, &owner, status_dto("cancelled"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    Ok(())
}

/// Tests the customer cannot drive the workflow.
///
/// Status changes belong to the restaurant side; an admin may also step in.
///
/// Expected: Err(AccessDenied) for the customer, Ok for an admin
#[tokio::test]
async fn only_owner_or_admin_updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    let service = OrderService::new(db);

    let result = service
        .update_status(order.id, &customer, status_dto("confirmed"))
        .await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    let updated = service
        .update_status(order.id, &admin, status_dto("confirmed"))
        .await?;
    assert_eq!(updated.status, OrderStatus::Confirmed.as_str());

    Ok(())
}

/// Tests an unknown status string is a validation failure.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn unknown_status_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let result = OrderService::new(db)
        .update_status(order.id, &owner, status_dto("teleported"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    Ok(())
}

/// Tests a custom tracking message overrides the default.
///
/// Expected: latest tracking entry carries the caller's message
#[tokio::test]
async fn custom_message_is_recorded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, owner, _restaurant, _item, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db);

    service
        .update_status(
            order.id,
            &owner,
            UpdateStatusDto {
                status: "confirmed".to_string(),
                message: Some("See you in 20 minutes".to_string()),
            },
        )
        .await?;

    let tracking = service.get_tracking(order.id, &owner).await?;
    assert_eq!(tracking.last().unwrap().message, "See you in 20 minutes");

    Ok(())
}
