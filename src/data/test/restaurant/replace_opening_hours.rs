use super::*;

fn hours(weekdays: &[i16]) -> Vec<OpeningHourParams> {
    weekdays
        .iter()
        .map(|&weekday| OpeningHourParams {
            weekday,
            opens_at: "10:00".to_string(),
            closes_at: "22:00".to_string(),
        })
        .collect()
}

/// Replacing swaps the full set; earlier rows do not linger.
#[tokio::test]
async fn replaces_previous_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    let repo = RestaurantRepository::new(db);
    repo.replace_opening_hours(restaurant.id, hours(&[0, 1, 2])).await?;
    let replaced = repo.replace_opening_hours(restaurant.id, hours(&[5, 6])).await?;

    assert_eq!(replaced.len(), 2);

    let details = repo.get_with_details(restaurant.id).await?.unwrap();
    let weekdays: Vec<i16> = details
        .opening_hours
        .iter()
        .map(|hour| hour.weekday)
        .collect();
    assert_eq!(weekdays, vec![5, 6]);

    Ok(())
}

#[tokio::test]
async fn empty_set_clears_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    let repo = RestaurantRepository::new(db);
    repo.replace_opening_hours(restaurant.id, hours(&[3])).await?;
    repo.replace_opening_hours(restaurant.id, Vec::new()).await?;

    let details = repo.get_with_details(restaurant.id).await?.unwrap();
    assert!(details.opening_hours.is_empty());

    Ok(())
}
