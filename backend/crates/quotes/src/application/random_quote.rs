//! Random Quote Use Case

use std::sync::Arc;

use rand::seq::IndexedRandom;

use crate::domain::entity::Quote;
use crate::domain::repository::QuoteRepository;
use crate::error::{QuoteError, QuoteResult};

/// Pick one stored quote uniformly at random
pub struct RandomQuoteUseCase<R>
where
    R: QuoteRepository,
{
    repo: Arc<R>,
}

impl<R> RandomQuoteUseCase<R>
where
    R: QuoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> QuoteResult<Quote> {
        let quotes = self.repo.list().await?;
        pick(&quotes).ok_or_else(QuoteError::no_quotes)
    }
}

// ThreadRng is !Send, so it must stay out of the async body.
fn pick(quotes: &[Quote]) -> Option<Quote> {
    quotes.choose(&mut rand::rng()).cloned()
}
