use super::*;

/// Tests adding a new patron.
///
/// Expected: Ok with the patron stored
#[tokio::test]
async fn adds_new_patron() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patron)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatronRepository::new(db);
    repo.upsert(PatronParam {
        user_id: 1,
        guild_id: Some(2),
    })
    .await?;

    let patrons = repo.get_all().await?;
    assert_eq!(
        patrons,
        vec![PatronParam {
            user_id: 1,
            guild_id: Some(2)
        }]
    );

    Ok(())
}

/// Tests that upserting an existing patron changes its guild scope.
///
/// Expected: Ok with a single row carrying the new guild
#[tokio::test]
async fn moves_existing_patron_to_new_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patron)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PatronFactory::new(db)
        .user_id("1")
        .guild_id("2")
        .build()
        .await?;

    let repo = PatronRepository::new(db);
    repo.upsert(PatronParam {
        user_id: 1,
        guild_id: Some(3),
    })
    .await?;

    let patrons = repo.get_all().await?;
    assert_eq!(patrons.len(), 1);
    assert_eq!(patrons[0].guild_id, Some(3));

    Ok(())
}
