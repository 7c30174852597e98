use super::*;

fn query() -> RestaurantQuery {
    RestaurantQuery {
        cuisine: None,
        city: None,
        search: None,
        page: 0,
        entries: 20,
    }
}

#[tokio::test]
async fn lists_all_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    factory::create_restaurant(db, owner.id).await?;
    factory::create_restaurant(db, owner.id).await?;

    let repo = RestaurantRepository::new(db);
    let (restaurants, total) = repo.list(&query()).await?;

    assert_eq!(restaurants.len(), 2);
    assert_eq!(total, 2);

    Ok(())
}

/// Cuisine filtering is an exact match.
#[tokio::test]
async fn filters_by_cuisine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    test_utils::factory::restaurant::RestaurantFactory::new(db, owner.id)
        .cuisine("thai")
        .build()
        .await?;
    test_utils::factory::restaurant::RestaurantFactory::new(db, owner.id)
        .cuisine("italian")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let (restaurants, total) = repo
        .list(&RestaurantQuery {
            cuisine: Some("thai".to_string()),
            ..query()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(restaurants[0].cuisine, "thai");

    Ok(())
}

/// Name search is a substring match.
#[tokio::test]
async fn searches_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    test_utils::factory::restaurant::RestaurantFactory::new(db, owner.id)
        .name("Luigi's Pizzeria")
        .build()
        .await?;
    test_utils::factory::restaurant::RestaurantFactory::new(db, owner.id)
        .name("Golden Dragon")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let (restaurants, total) = repo
        .list(&RestaurantQuery {
            search: Some("Pizz".to_string()),
            ..query()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(restaurants[0].name, "Luigi's Pizzeria");

    Ok(())
}

#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    for _ in 0..5 {
        factory::create_restaurant(db, owner.id).await?;
    }

    let repo = RestaurantRepository::new(db);
    let (page, total) = repo
        .list(&RestaurantQuery {
            entries: 2,
            page: 1,
            ..query()
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    Ok(())
}
