use super::*;

/// Tests loading global and one-guild patrons.
///
/// Expected: Ok with guild scope preserved per patron
#[tokio::test]
async fn loads_global_and_guild_patrons() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patron)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PatronFactory::new(db).user_id("10").build().await?;
    PatronFactory::new(db)
        .user_id("20")
        .guild_id("500")
        .build()
        .await?;

    let mut patrons = PatronRepository::new(db).get_all().await?;
    patrons.sort_by_key(|p| p.user_id);

    assert_eq!(
        patrons,
        vec![
            PatronParam {
                user_id: 10,
                guild_id: None
            },
            PatronParam {
                user_id: 20,
                guild_id: Some(500)
            },
        ]
    );

    Ok(())
}

/// Tests that an unparseable user_id is reported.
///
/// Expected: Err(StoreError::Corrupt)
#[tokio::test]
async fn fails_on_corrupt_user_id() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patron)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PatronFactory::new(db).user_id("someone").build().await?;

    let result = PatronRepository::new(db).get_all().await;

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));

    Ok(())
}
