use super::*;

/// Average and count over all surviving reviews of the restaurant.
#[tokio::test]
async fn averages_over_all_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, restaurant, address) = review_world(db).await?;
    let repo = ReviewRepository::new(db);

    for rating in [5, 4, 3] {
        let order = test_utils::factory::order::create_delivered_order(
            db,
            customer.id,
            restaurant.id,
            address.id,
        )
        .await?;
        repo.create(CreateReviewParams {
            order_id: order.id,
            customer_id: customer.id,
            restaurant_id: restaurant.id,
            rating,
            comment: None,
        })
        .await?;
    }

    let (average, count) = repo.aggregate(restaurant.id).await?;
    assert_eq!(count, 3);
    assert_eq!(average, 4.0);

    Ok(())
}

/// No reviews means a zero aggregate, not an error.
#[tokio::test]
async fn returns_zero_for_unreviewed_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, restaurant, _) = review_world(db).await?;

    let (average, count) = ReviewRepository::new(db).aggregate(restaurant.id).await?;
    assert_eq!(average, 0.0);
    assert_eq!(count, 0);

    Ok(())
}
