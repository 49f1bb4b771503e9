//! Footer quote factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FooterQuoteFactory<'a> {
    db: &'a DatabaseConnection,
    quote: String,
}

impl<'a> FooterQuoteFactory<'a> {
    /// Creates a new FooterQuoteFactory with a unique `"Quote {id}"` text.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            quote: format!("Quote {}", next_id()),
        }
    }

    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    pub async fn build(self) -> Result<entity::footer_quote::Model, DbErr> {
        entity::footer_quote::ActiveModel {
            quote: ActiveValue::Set(self.quote),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
