//! List Quotes Use Cases

use std::sync::Arc;

use crate::domain::entity::Quote;
use crate::domain::repository::QuoteRepository;
use crate::domain::value_object::Author;
use crate::error::{QuoteError, QuoteResult};

/// Every stored quote, in insertion order
pub struct ListQuotesUseCase<R>
where
    R: QuoteRepository,
{
    repo: Arc<R>,
}

impl<R> ListQuotesUseCase<R>
where
    R: QuoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> QuoteResult<Vec<Quote>> {
        self.repo.list().await
    }
}

/// Quotes by one author (exact match)
pub struct ListQuotesByAuthorUseCase<R>
where
    R: QuoteRepository,
{
    repo: Arc<R>,
}

impl<R> ListQuotesByAuthorUseCase<R>
where
    R: QuoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// An empty `author` is rejected; an unknown one yields an empty list.
    pub async fn execute(&self, author: String) -> QuoteResult<Vec<Quote>> {
        let author = Author::new(author)
            .map_err(|_| QuoteError::validation("Query parameter 'author' must not be empty"))?;

        self.repo.list_by_author(&author).await
    }
}
