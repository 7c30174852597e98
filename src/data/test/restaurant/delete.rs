use super::*;

/// Deleting removes the restaurant together with its hours and images.
#[tokio::test]
async fn removes_restaurant_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    let repo = RestaurantRepository::new(db);
    repo.replace_opening_hours(
        restaurant.id,
        vec![OpeningHourParams {
            weekday: 0,
            opens_at: "09:00".to_string(),
            closes_at: "17:00".to_string(),
        }],
    )
    .await?;
    repo.add_image(restaurant.id, "/uploads/a.png".to_string(), 0).await?;

    repo.delete(restaurant.id).await?;

    assert!(repo.find_by_id(restaurant.id).await?.is_none());

    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
    let hours = entity::prelude::OpeningHour::find()
        .filter(entity::opening_hour::Column::RestaurantId.eq(restaurant.id))
        .all(db)
        .await?;
    assert!(hours.is_empty());

    let images = entity::prelude::RestaurantImage::find()
        .filter(entity::restaurant_image::Column::RestaurantId.eq(restaurant.id))
        .all(db)
        .await?;
    assert!(images.is_empty());

    Ok(())
}
