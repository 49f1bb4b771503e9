use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;

use crate::data::footer_quote::FooterQuoteRepository;

/// Quote every bot instance ships with, shown even when the table is empty.
const BUILTIN_QUOTE: &str = "I want your quotes - duncte123";

/// Read-only set of quotes used as embed footers.
#[derive(Debug, Clone)]
pub struct FooterQuotes {
    quotes: Vec<String>,
}

impl FooterQuotes {
    pub fn new(quotes: Vec<String>) -> Self {
        let mut all = Vec::with_capacity(quotes.len() + 1);
        all.push(BUILTIN_QUOTE.to_string());
        all.extend(quotes);
        Self { quotes: all }
    }

    /// Loads stored quotes after the built-in one.
    ///
    /// A failed query is logged and leaves only the built-in quote.
    pub async fn load(db: &DatabaseConnection) -> Self {
        match FooterQuoteRepository::new(db).get_all().await {
            Ok(quotes) => {
                tracing::info!("Loaded {} footer quotes", quotes.len());
                Self::new(quotes)
            }
            Err(e) => {
                tracing::warn!("Failed to load footer quotes: {}", e);
                Self::new(Vec::new())
            }
        }
    }

    pub fn random(&self) -> &str {
        self.quotes
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or(BUILTIN_QUOTE)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
