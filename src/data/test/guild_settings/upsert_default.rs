use super::*;

/// Tests inserting defaults for a new guild.
///
/// Expected: Ok(true) with one row holding the default values
#[tokio::test]
async fn inserts_defaults_for_new_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let defaults = GuildSettings::new_default(123456789, "New Guild", "db!");

    let inserted = repo.upsert_default(&defaults).await?;
    assert!(inserted);

    let stored = repo.find(123456789).await?.unwrap();
    assert_eq!(stored, defaults);

    Ok(())
}

/// Tests that an existing row is left untouched.
///
/// Verifies that upserting defaults for a guild that already customised its
/// settings neither overwrites them nor creates a second row.
///
/// Expected: Ok(false) with original values preserved
#[tokio::test]
async fn keeps_existing_row() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id("123456789")
        .prefix("?")
        .swear_filter(true)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let inserted = repo
        .upsert_default(&GuildSettings::new_default(123456789, "Guild", "db!"))
        .await?;
    assert!(!inserted);

    let stored = repo.find(123456789).await?.unwrap();
    assert_eq!(stored.prefix, "?");
    assert!(stored.enable_swear_filter);

    let count = entity::prelude::GuildSettings::find()
        .filter(entity::guild_settings::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests repeated upserts for the same guild.
///
/// Expected: exactly one row after several calls
#[tokio::test]
async fn repeated_upserts_create_one_row() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let defaults = GuildSettings::new_default(42, "Guild", "db!");

    let mut inserted = 0;
    for _ in 0..5 {
        if repo.upsert_default(&defaults).await? {
            inserted += 1;
        }
    }

    assert_eq!(inserted, 1);
    let count = entity::prelude::GuildSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
