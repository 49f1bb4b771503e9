use super::*;

/// Tests that quotes come back in insertion order.
///
/// Expected: Ok with quotes ordered by id
#[tokio::test]
async fn returns_quotes_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FooterQuote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FooterQuoteFactory::new(db).quote("first").build().await?;
    FooterQuoteFactory::new(db).quote("second").build().await?;
    FooterQuoteFactory::new(db).quote("third").build().await?;

    let quotes = FooterQuoteRepository::new(db).get_all().await?;

    assert_eq!(quotes, vec!["first", "second", "third"]);

    Ok(())
}

/// Tests that duplicate quotes are kept.
///
/// Expected: Ok with both copies
#[tokio::test]
async fn keeps_duplicate_quotes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FooterQuote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FooterQuoteFactory::new(db).quote("same").build().await?;
    FooterQuoteFactory::new(db).quote("same").build().await?;

    let quotes = FooterQuoteRepository::new(db).get_all().await?;

    assert_eq!(quotes.len(), 2);

    Ok(())
}
