use super::*;

/// Listing is scoped to one customer, newest order first.
#[tokio::test]
async fn lists_only_own_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let other = factory::create_customer(db).await?;
    let other_address = factory::create_address(db, other.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    let first = factory::create_order(db, customer.id, restaurant.id, address.id).await?;
    let second = factory::create_order(db, customer.id, restaurant.id, address.id).await?;
    factory::create_order(db, other.id, restaurant.id, other_address.id).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo.list_by_customer(customer.id, 0, 20).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
