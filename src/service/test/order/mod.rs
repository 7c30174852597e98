use entity::enums::{OrderStatus, Role};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{auth::AuthError, AppError},
    model::order::{CheckoutDto, CheckoutItemDto, UpdateStatusDto},
    service::order::OrderService,
};

mod checkout;
mod update_status;
mod view;

fn status_dto(status: &str) -> UpdateStatusDto {
    UpdateStatusDto {
        status: status.to_string(),
        message: None,
    }
}
