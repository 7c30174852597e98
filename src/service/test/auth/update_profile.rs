use super::*;

/// Tests a profile update changes the name without touching the password.
///
/// Expected: Ok(UserDto) with the new name
#[tokio::test]
async fn updates_name_and_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);

    let user = factory::create_customer(db).await?;

    let updated = service
        .update_profile(
            user,
            UpdateProfileDto {
                name: Some("Renamed".to_string()),
                phone: Some("555-0101".to_string()),
                current_password: None,
                new_password: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone.as_deref(), Some("555-0101"));

    Ok(())
}

/// Tests a password change requires re-proving the current password.
///
/// Expected: Err(Validation) with no current password, then
/// Err(InvalidCredentials) with a wrong one, then Ok with the right one
#[tokio::test]
async fn password_change_requires_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    let service = AuthService::new(db, &config);

    let user = factory::user::UserFactory::new(db)
        .password_hash(hash_password("old password")?)
        .build()
        .await?;

    let missing = service
        .update_profile(
            user.clone(),
            UpdateProfileDto {
                name: None,
                phone: None,
                current_password: None,
                new_password: Some("new password".to_string()),
            },
        )
        .await;
    assert!(matches!(missing.unwrap_err(), AppError::Validation(_)));

    let wrong = service
        .update_profile(
            user.clone(),
            UpdateProfileDto {
                name: None,
                phone: None,
                current_password: Some("not the password".to_string()),
                new_password: Some("new password".to_string()),
            },
        )
        .await;
    assert!(matches!(
        wrong.unwrap_err(),
        AppError::AuthErr(AuthError::InvalidCredentials)
    ));

    service
        .update_profile(
            user.clone(),
            UpdateProfileDto {
                name: None,
                phone: None,
                current_password: Some("old password".to_string()),
                new_password: Some("new password".to_string()),
            },
        )
        .await?;

    let stored = crate::data::user::UserRepository::new(db)
        .find_by_email(&user.email)
        .await?
        .unwrap();
    assert!(verify_password("new password", &stored.password_hash));

    Ok(())
}
