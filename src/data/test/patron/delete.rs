use super::*;

/// Tests deleting an existing patron.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_existing_patron() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patron)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PatronFactory::new(db).user_id("1").build().await?;
    PatronFactory::new(db).user_id("2").build().await?;

    let repo = PatronRepository::new(db);
    assert!(repo.delete(1).await?);

    let patrons = repo.get_all().await?;
    assert_eq!(patrons.len(), 1);
    assert_eq!(patrons[0].user_id, 2);

    Ok(())
}

/// Tests deleting a user who is not a patron.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_patron() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patron)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PatronRepository::new(db).delete(404).await?);

    Ok(())
}
