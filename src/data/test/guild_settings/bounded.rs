use sea_orm::DbErr;

use super::*;

/// Tests a query that never completes.
///
/// Expected: Err(StoreError::Timeout) naming the operation and the bound
#[tokio::test]
async fn times_out_stalled_query() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bound = Duration::from_millis(20);
    let repo = GuildSettingsRepository::new(db.clone(), bound);

    let result = repo
        .bounded("update", std::future::pending::<Result<u64, DbErr>>())
        .await;

    assert!(matches!(
        result,
        Err(StoreError::Timeout { operation: "update", timeout }) if timeout == bound
    ));

    Ok(())
}

/// Tests a query that fails before the bound elapses.
///
/// Expected: Err(StoreError::Unavailable) carrying the database error
#[tokio::test]
async fn passes_through_database_errors() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);

    let result = repo
        .bounded("find", async {
            Err::<u64, DbErr>(DbErr::Custom("disk I/O error".to_string()))
        })
        .await;

    assert!(matches!(result, Err(StoreError::Unavailable(DbErr::Custom(_)))));

    Ok(())
}

/// Tests a real query well within the bound.
///
/// Expected: Ok with the query result
#[tokio::test]
async fn returns_result_within_bound() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db).build().await?;

    let repo = GuildSettingsRepository::new(db.clone(), TIMEOUT);
    let count = repo
        .bounded(
            "count",
            entity::prelude::GuildSettings::find().count(db),
        )
        .await?;

    assert_eq!(count, 1);

    Ok(())
}
