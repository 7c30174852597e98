use super::*;

use entity::enums::Role;

/// Tests registration creates a customer account and hashes the password.
///
/// The stored hash must verify against the submitted password and must not
/// be the password itself.
///
/// Expected: Ok(TokenDto) with role `customer`
#[tokio::test]
async fn creates_customer_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);
    let codes = BootstrapCodeService::new();

    let result = service
        .register(register_dto("alice@example.com"), &codes)
        .await?;

    assert_eq!(result.user.email, "alice@example.com");
    assert_eq!(result.user.role, Role::Customer.as_str());
    assert!(!result.token.is_empty());

    let stored = crate::data::user::UserRepository::new(db)
        .find_by_email("alice@example.com")
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "hunter2-long");
    assert!(verify_password("hunter2-long", &stored.password_hash));

    Ok(())
}

/// Tests the restaurant-owner flag yields an owner account.
///
/// Expected: Ok(TokenDto) with role `restaurant_owner`
#[tokio::test]
async fn owner_flag_assigns_owner_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);
    let codes = BootstrapCodeService::new();

    let mut dto = register_dto("owner@example.com");
    dto.restaurant_owner = true;

    let result = service.register(dto, &codes).await?;

    assert_eq!(result.user.role, Role::RestaurantOwner.as_str());

    Ok(())
}

/// Tests a valid bootstrap code grants the admin role and is consumed.
///
/// A second registration replaying the same code is rejected.
///
/// Expected: first Ok with role `admin`, second Err(Validation)
#[tokio::test]
async fn bootstrap_code_grants_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);
    let codes = BootstrapCodeService::new();
    let code = codes.generate();

    let mut dto = register_dto("first-admin@example.com");
    dto.bootstrap_code = Some(code.clone());
    let result = service.register(dto, &codes).await?;
    assert_eq!(result.user.role, Role::Admin.as_str());

    let mut replay = register_dto("second-admin@example.com");
    replay.bootstrap_code = Some(code);
    let result = service.register(replay, &codes).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    Ok(())
}

/// Tests a wrong bootstrap code fails instead of silently downgrading.
///
/// Expected: Err(AppError::Validation), no account created
#[tokio::test]
async fn wrong_bootstrap_code_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);
    let codes = BootstrapCodeService::new();
    codes.generate();

    let mut dto = register_dto("wannabe@example.com");
    dto.bootstrap_code = Some("WRONGCODE".to_string());

    let result = service.register(dto, &codes).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let stored = crate::data::user::UserRepository::new(db)
        .find_by_email("wannabe@example.com")
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests a duplicate email is a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_email_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);
    let codes = BootstrapCodeService::new();

    service
        .register(register_dto("taken@example.com"), &codes)
        .await?;
    let result = service
        .register(register_dto("taken@example.com"), &codes)
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    Ok(())
}

/// Tests malformed input is rejected before any account is created.
///
/// Expected: Err(AppError::Validation) for a bad email, a short password,
/// and a blank name
#[tokio::test]
async fn invalid_input_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);
    let codes = BootstrapCodeService::new();

    let result = service.register(register_dto("no-at-sign"), &codes).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let mut short = register_dto("short@example.com");
    short.password = "short".to_string();
    let result = service.register(short, &codes).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let mut blank = register_dto("blank@example.com");
    blank.name = "   ".to_string();
    let result = service.register(blank, &codes).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    Ok(())
}
