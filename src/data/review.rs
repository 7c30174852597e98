use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CreateReviewParams {
    pub order_id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub rating: i16,
    pub comment: Option<String>,
}

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            customer_id: ActiveValue::Set(params.customer_id),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_order(&self, order_id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::OrderId.eq(order_id))
            .one(self.db)
            .await
    }

    pub async fn list_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        review: entity::review::Model,
        rating: Option<i16>,
        comment: Option<String>,
    ) -> Result<entity::review::Model, DbErr> {
        let mut active: entity::review::ActiveModel = review.into();
        if let Some(rating) = rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = comment {
            active.comment = ActiveValue::Set(Some(comment));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Average rating and count over the restaurant's surviving reviews.
    /// Returns `(0.0, 0)` when none remain.
    pub async fn aggregate(&self, restaurant_id: i32) -> Result<(f64, i32), DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::RestaurantId.eq(restaurant_id))
            .all(self.db)
            .await?;

        if reviews.is_empty() {
            return Ok((0.0, 0));
        }

        let count = reviews.len() as i32;
        let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();

        Ok((sum as f64 / f64::from(count), count))
    }
}
