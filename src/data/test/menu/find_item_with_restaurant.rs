use super::*;

/// The item resolves to the restaurant of its category, which checkout uses
/// to reject items from other restaurants.
#[tokio::test]
async fn resolves_owning_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;
    let category = factory::create_category(db, restaurant.id).await?;
    let item = factory::create_menu_item(db, category.id).await?;

    let repo = MenuRepository::new(db);
    let (found, owning_restaurant) = repo
        .find_item_with_restaurant(item.id)
        .await?
        .expect("item should resolve");

    assert_eq!(found.id, item.id);
    assert_eq!(owning_restaurant, restaurant.id);

    Ok(())
}

#[tokio::test]
async fn unknown_item_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuRepository::new(db);
    assert!(repo.find_item_with_restaurant(4242).await?.is_none());

    Ok(())
}
