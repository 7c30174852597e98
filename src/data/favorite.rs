use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite; adding the same restaurant twice is a no-op.
    pub async fn add(&self, user_id: i32, restaurant_id: i32) -> Result<(), DbErr> {
        if self.exists(user_id, restaurant_id).await? {
            return Ok(());
        }

        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            restaurant_id: ActiveValue::Set(restaurant_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a favorite. Returns whether a row was removed.
    pub async fn remove(&self, user_id: i32, restaurant_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RestaurantId.eq(restaurant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, user_id: i32, restaurant_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RestaurantId.eq(restaurant_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// The user's favorite restaurants, resolved to restaurant rows.
    pub async fn list_restaurants(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::restaurant::Model>, DbErr> {
        let restaurant_ids: Vec<i32> = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .select_only()
            .column(entity::favorite::Column::RestaurantId)
            .into_tuple()
            .all(self.db)
            .await?;

        if restaurant_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Id.is_in(restaurant_ids))
            .order_by_asc(entity::restaurant::Column::Name)
            .all(self.db)
            .await
    }
}
