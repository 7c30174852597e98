use super::*;

/// Tests deleting the only review resets the restaurant aggregate.
///
/// Expected: Ok(()), restaurant back at (0.0, 0)
#[tokio::test]
async fn author_delete_resets_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, restaurant, order) = delivered_world(db).await?;
    let service = ReviewService::new(db);

    let review = service
        .create(restaurant.id, &customer, review_dto(order.id, 4))
        .await?;
    service.delete(review.id, &customer).await?;

    let stored = RestaurantRepository::new(db)
        .find_by_id(restaurant.id)
        .await?
        .unwrap();
    assert_eq!(stored.rating, 0.0);
    assert_eq!(stored.rating_count, 0);

    Ok(())
}

/// Tests an admin can remove any review; a stranger cannot.
///
/// The stranger gets a 403 even though the review exists, so the response
/// does not leak whose review it is.
///
/// Expected: Err(AccessDenied) for the stranger, Ok for the admin
#[tokio::test]
async fn only_author_or_admin_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, restaurant, order) = delivered_world(db).await?;
    let stranger = factory::create_customer(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    let service = ReviewService::new(db);

    let review = service
        .create(restaurant.id, &customer, review_dto(order.id, 3))
        .await?;

    let result = service.delete(review.id, &stranger).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    service.delete(review.id, &admin).await?;

    let result = service.delete(review.id, &admin).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));

    Ok(())
}
