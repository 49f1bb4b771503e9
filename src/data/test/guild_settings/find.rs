use super::*;

/// Tests finding the settings row of a known guild.
///
/// Expected: Ok(Some(settings))
#[tokio::test]
async fn finds_existing_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id("123456789")
        .name("Test Guild")
        .filter_invites(true)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let settings = repo.find(123456789).await?.unwrap();

    assert_eq!(settings.guild_id, 123456789);
    assert_eq!(settings.name, "Test Guild");
    assert!(settings.filter_invites);

    Ok(())
}

/// Tests finding a guild that has no row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let settings = repo.find(999999999).await?;

    assert!(settings.is_none());

    Ok(())
}
