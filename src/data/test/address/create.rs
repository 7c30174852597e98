use super::*;

/// At most one default address per user: a new default clears the old one.
#[tokio::test]
async fn new_default_clears_previous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AddressRepository::new(db);

    let home = repo.create(user.id, address_dto("Home", true)).await?;
    let work = repo.create(user.id, address_dto("Work", true)).await?;

    let addresses = repo.get_by_user(user.id).await?;
    let defaults: Vec<&entity::address::Model> =
        addresses.iter().filter(|address| address.is_default).collect();

    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, work.id);
    assert_ne!(defaults[0].id, home.id);

    Ok(())
}

/// Another user's default is not affected.
#[tokio::test]
async fn default_is_scoped_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let repo = AddressRepository::new(db);

    repo.create(alice.id, address_dto("Home", true)).await?;
    repo.create(bob.id, address_dto("Home", true)).await?;

    let alices = repo.get_by_user(alice.id).await?;
    assert!(alices[0].is_default);

    Ok(())
}
