use super::*;

/// Tests checkout snapshots prices and computes the total.
///
/// Two units at 1000 cents plus the restaurant's 250-cent delivery fee.
///
/// Expected: Ok(OrderDto) in `pending` with total 2250 and the item name
/// copied into the order line
#[tokio::test]
async fn places_order_with_snapshot_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let category = factory::create_category(db, restaurant.id).await?;
    let item = factory::menu::MenuItemFactory::new(db, category.id)
        .name("Margherita")
        .price_cents(1000)
        .build()
        .await?;

    let order = OrderService::new(db)
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: None,
                items: vec![CheckoutItemDto {
                    menu_item_id: item.id,
                    quantity: 2,
                }],
            },
        )
        .await?;

    assert_eq!(order.status, OrderStatus::Pending.as_str());
    assert_eq!(order.subtotal_cents, 2000);
    assert_eq!(order.delivery_fee_cents, 250);
    assert_eq!(order.total_cents, 2250);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].item_name, "Margherita");
    assert_eq!(order.items[0].unit_price_cents, 1000);

    Ok(())
}

/// Tests a closed restaurant refuses orders.
///
/// The request itself is fine, so this is a conflict rather than a
/// validation failure.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn closed_restaurant_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::restaurant::RestaurantFactory::new(db, owner.id)
        .is_open(false)
        .build()
        .await?;
    let category = factory::create_category(db, restaurant.id).await?;
    let item = factory::create_menu_item(db, category.id).await?;

    let result = OrderService::new(db)
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: None,
                items: vec![CheckoutItemDto {
                    menu_item_id: item.id,
                    quantity: 1,
                }],
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    Ok(())
}

/// Tests ordering to somebody else's delivery address is rejected.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn foreign_address_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let other = factory::create_customer(db).await?;
    let foreign_address = factory::create_address(db, other.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let category = factory::create_category(db, restaurant.id).await?;
    let item = factory::create_menu_item(db, category.id).await?;

    let result = OrderService::new(db)
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: foreign_address.id,
                note: None,
                items: vec![CheckoutItemDto {
                    menu_item_id: item.id,
                    quantity: 1,
                }],
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    Ok(())
}

/// Tests an unavailable item blocks checkout.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn unavailable_item_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let category = factory::create_category(db, restaurant.id).await?;
    let item = factory::menu::MenuItemFactory::new(db, category.id)
        .is_available(false)
        .build()
        .await?;

    let result = OrderService::new(db)
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: None,
                items: vec![CheckoutItemDto {
                    menu_item_id: item.id,
                    quantity: 1,
                }],
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    Ok(())
}

/// Tests an item from another restaurant cannot be smuggled into the order.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn item_from_other_restaurant_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let other_restaurant = factory::create_restaurant(db, owner.id).await?;
    let other_category = factory::create_category(db, other_restaurant.id).await?;
    let foreign_item = factory::create_menu_item(db, other_category.id).await?;

    let result = OrderService::new(db)
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: None,
                items: vec![CheckoutItemDto {
                    menu_item_id: foreign_item.id,
                    quantity: 1,
                }],
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    Ok(())
}

/// Tests an empty cart and a zero quantity are both validation failures.
///
/// Expected: Err(AppError::Validation) for both
#[tokio::test]
async fn empty_cart_and_zero_quantity_are_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let category = factory::create_category(db, restaurant.id).await?;
    let item = factory::create_menu_item(db, category.id).await?;

    let service = OrderService::new(db);

    let empty = service
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: None,
                items: vec![],
            },
        )
        .await;
    assert!(matches!(empty.unwrap_err(), AppError::Validation(_)));

    let zero = service
        .checkout(
            &customer,
            CheckoutDto {
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: None,
                items: vec![CheckoutItemDto {
                    menu_item_id: item.id,
                    quantity: 0,
                }],
            },
        )
        .await;
    assert!(matches!(zero.unwrap_err(), AppError::Validation(_)));

    Ok(())
}
