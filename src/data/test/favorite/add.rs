use super::*;

/// Adding the same favorite twice leaves a single row.
#[tokio::test]
async fn add_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(customer.id, restaurant.id).await?;
    repo.add(customer.id, restaurant.id).await?;

    let favorites = repo.list_restaurants(customer.id).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, restaurant.id);

    Ok(())
}

#[tokio::test]
async fn remove_reports_whether_row_existed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(customer.id, restaurant.id).await?;

    assert!(repo.remove(customer.id, restaurant.id).await?);
    assert!(!repo.remove(customer.id, restaurant.id).await?);

    Ok(())
}
