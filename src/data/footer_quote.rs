use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct FooterQuoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FooterQuoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored quote in insertion order.
    pub async fn get_all(&self) -> Result<Vec<String>, DbErr> {
        let quotes = entity::prelude::FooterQuote::find()
            .order_by_asc(entity::footer_quote::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|q| q.quote)
            .collect();

        Ok(quotes)
    }
}
