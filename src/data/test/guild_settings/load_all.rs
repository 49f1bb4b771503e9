use super::*;

/// Tests loading settings from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let settings = repo.load_all().await?;

    assert!(settings.is_empty());

    Ok(())
}

/// Tests loading every stored row with its column values.
///
/// Verifies that prefixes, filter flags and mute roles survive the conversion
/// from entity to domain model.
///
/// Expected: Ok with one domain model per row
#[tokio::test]
async fn loads_all_rows() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id("111")
        .prefix("?")
        .swear_filter(true)
        .build()
        .await?;
    GuildSettingsFactory::new(db)
        .guild_id("222")
        .mute_role_id(Some(555))
        .spam_filter(true)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let mut settings = repo.load_all().await?;
    settings.sort_by_key(|s| s.guild_id);

    assert_eq!(settings.len(), 2);
    assert_eq!(settings[0].guild_id, 111);
    assert_eq!(settings[0].prefix, "?");
    assert!(settings[0].enable_swear_filter);
    assert_eq!(settings[1].guild_id, 222);
    assert_eq!(settings[1].mute_role_id, Some(555));
    assert!(settings[1].enable_spam_filter);

    Ok(())
}

/// Tests that a row with an unparseable guild_id does not block the others.
///
/// Expected: Ok with only the valid row
#[tokio::test]
async fn skips_corrupt_rows() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db).guild_id("333").build().await?;
    GuildSettingsFactory::new(db)
        .guild_id("not-a-guild")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let settings = repo.load_all().await?;

    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0].guild_id, 333);

    Ok(())
}

/// Tests that a missing table surfaces as an unavailable store.
///
/// Expected: Err(StoreError::Unavailable)
#[tokio::test]
async fn fails_when_table_missing() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let result = repo.load_all().await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
