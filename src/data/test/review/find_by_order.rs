use super::*;

/// One review per order: the lookup used for the duplicate check.
#[tokio::test]
async fn finds_review_for_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, restaurant, address) = review_world(db).await?;
    let order = test_utils::factory::order::create_delivered_order(
        db,
        customer.id,
        restaurant.id,
        address.id,
    )
    .await?;

    let repo = ReviewRepository::new(db);
    assert!(repo.find_by_order(order.id).await?.is_none());

    let created = repo
        .create(CreateReviewParams {
            order_id: order.id,
            customer_id: customer.id,
            restaurant_id: restaurant.id,
            rating: 5,
            comment: Some("Great".to_string()),
        })
        .await?;

    let found = repo.find_by_order(order.id).await?;
    assert_eq!(found.map(|review| review.id), Some(created.id));

    Ok(())
}
