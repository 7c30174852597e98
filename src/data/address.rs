use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::user::{CreateAddressDto, UpdateAddressDto};

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an address for the user. When `is_default` is set, any previous
    /// default is cleared first so at most one default exists per user.
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateAddressDto,
    ) -> Result<entity::address::Model, DbErr> {
        if dto.is_default {
            self.clear_default(user_id).await?;
        }

        entity::address::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            label: ActiveValue::Set(dto.label),
            street: ActiveValue::Set(dto.street),
            city: ActiveValue::Set(dto.city),
            postal_code: ActiveValue::Set(dto.postal_code),
            is_default: ActiveValue::Set(dto.is_default),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::address::Model>, DbErr> {
        entity::prelude::Address::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::address::Model>, DbErr> {
        entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .order_by_asc(entity::address::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates an address, returning `None` when it does not exist or does
    /// not belong to the user.
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        dto: UpdateAddressDto,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        let Some(address) = self.find_owned(user_id, id).await? else {
            return Ok(None);
        };

        if dto.is_default == Some(true) {
            self.clear_default(user_id).await?;
        }

        let mut active: entity::address::ActiveModel = address.into();
        if let Some(label) = dto.label {
            active.label = ActiveValue::Set(label);
        }
        if let Some(street) = dto.street {
            active.street = ActiveValue::Set(street);
        }
        if let Some(city) = dto.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(postal_code) = dto.postal_code {
            active.postal_code = ActiveValue::Set(postal_code);
        }
        if let Some(is_default) = dto.is_default {
            active.is_default = ActiveValue::Set(is_default);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an address owned by the user. Returns whether a row was removed.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Address::delete_many()
            .filter(entity::address::Column::Id.eq(id))
            .filter(entity::address::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_owned(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        entity::prelude::Address::find()
            .filter(entity::address::Column::Id.eq(id))
            .filter(entity::address::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    async fn clear_default(&self, user_id: i32) -> Result<(), DbErr> {
        let defaults = entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .filter(entity::address::Column::IsDefault.eq(true))
            .all(self.db)
            .await?;

        for address in defaults {
            let mut active: entity::address::ActiveModel = address.into();
            active.is_default = ActiveValue::Set(false);
            active.update(self.db).await?;
        }

        Ok(())
    }
}
