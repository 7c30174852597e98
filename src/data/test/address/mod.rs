use crate::data::address::AddressRepository;
use crate::model::user::CreateAddressDto;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn address_dto(label: &str, is_default: bool) -> CreateAddressDto {
    CreateAddressDto {
        label: label.to_string(),
        street: "1 Main Street".to_string(),
        city: "Testville".to_string(),
        postal_code: "12345".to_string(),
        is_default,
    }
}
