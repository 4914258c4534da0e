//! Create Quote Use Case

use std::sync::Arc;

use crate::domain::entity::{NewQuote, Quote};
use crate::domain::repository::QuoteRepository;
use crate::domain::value_object::{Author, QuoteText};
use crate::error::QuoteResult;

/// Input DTO for create quote
#[derive(Debug, Clone)]
pub struct CreateQuoteInput {
    pub author: String,
    pub text: String,
}

/// Create Quote Use Case
pub struct CreateQuoteUseCase<R>
where
    R: QuoteRepository,
{
    repo: Arc<R>,
}

impl<R> CreateQuoteUseCase<R>
where
    R: QuoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and store. Nothing reaches the store unless both fields are non-empty.
    pub async fn execute(&self, input: CreateQuoteInput) -> QuoteResult<Quote> {
        let author = Author::new(input.author)?;
        let text = QuoteText::new(input.text)?;

        let quote = self.repo.add(NewQuote::new(author, text)).await?;

        tracing::info!(quote_id = %quote.id, author = %quote.author, "Created quote");

        Ok(quote)
    }
}
