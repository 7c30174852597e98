use crate::data::review::{CreateReviewParams, ReviewRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod aggregate;
mod find_by_order;

async fn review_world(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::user::Model, entity::restaurant::Model, entity::address::Model), DbErr> {
    let customer = factory::create_customer(db).await?;
    let address = factory::create_address(db, customer.id).await?;
    let owner = factory::create_owner(db).await?;
    let restaurant = factory::create_restaurant(db, owner.id).await?;

    Ok((customer, restaurant, address))
}
