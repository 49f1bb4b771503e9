use super::*;

/// Tests overwriting every column of an existing row.
///
/// Expected: Ok(1) with the stored row equal to the new snapshot
#[tokio::test]
async fn updates_existing_row() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id("123456789")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let current = repo.find(123456789).await?.unwrap();
    let next = current
        .with_prefix("!")
        .with_swear_filter(true)
        .with_mute_role(Some(77))
        .with_spam_filter(true)
        .with_join_message("Hello {{USER_MENTION}}");

    let affected = repo.update(&next).await?;
    assert_eq!(affected, 1);

    let stored = repo.find(123456789).await?.unwrap();
    assert_eq!(stored, next);

    Ok(())
}

/// Tests updating a guild without a row.
///
/// Expected: Ok(0) and no row created
#[tokio::test]
async fn returns_zero_for_unknown_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let affected = repo
        .update(&GuildSettings::new_default(5, "Ghost", "db!"))
        .await?;

    assert_eq!(affected, 0);
    assert!(repo.find(5).await?.is_none());

    Ok(())
}

/// Tests that updating one guild leaves other rows alone.
///
/// Expected: Ok with the other guild's prefix unchanged
#[tokio::test]
async fn does_not_touch_other_guilds() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db).guild_id("1").prefix("a!").build().await?;
    GuildSettingsFactory::new(db).guild_id("2").prefix("b!").build().await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let first = repo.find(1).await?.unwrap().with_prefix("c!");
    repo.update(&first).await?;

    assert_eq!(repo.find(1).await?.unwrap().prefix, "c!");
    assert_eq!(repo.find(2).await?.unwrap().prefix, "b!");

    Ok(())
}
