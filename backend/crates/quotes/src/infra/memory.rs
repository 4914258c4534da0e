//! In-Memory Repository Implementation
//!
//! Quotes live in a `Vec` behind one `std::sync::Mutex`. Every operation
//! takes the lock for its whole duration, reads and writes alike. The guard
//! never crosses an `.await`.

use std::sync::{Arc, Mutex};

use crate::domain::entity::{NewQuote, Quote, QuoteId};
use crate::domain::repository::QuoteRepository;
use crate::domain::value_object::Author;
use crate::error::{QuoteError, QuoteResult};

#[derive(Debug)]
struct State {
    quotes: Vec<Quote>,
    /// `None` once the last representable id has been issued
    next_id: Option<QuoteId>,
}

/// In-memory quote store
///
/// Cloning is cheap and every clone shares the same collection.
#[derive(Debug, Clone)]
pub struct InMemoryQuoteRepository {
    state: Arc<Mutex<State>>,
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::starting_at(QuoteId::FIRST)
    }

    fn starting_at(first: QuoteId) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                quotes: Vec::new(),
                next_id: Some(first),
            })),
        }
    }

    /// Number of stored quotes
    pub fn len(&self) -> QuoteResult<usize> {
        Ok(self.state.lock()?.quotes.len())
    }

    pub fn is_empty(&self) -> QuoteResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl QuoteRepository for InMemoryQuoteRepository {
    async fn add(&self, quote: NewQuote) -> QuoteResult<Quote> {
        let mut state = self.state.lock()?;

        let id = state.next_id.ok_or(QuoteError::IdsExhausted)?;
        state.next_id = id.next();

        let quote = quote.into_quote(id);
        state.quotes.push(quote.clone());

        tracing::debug!(quote_id = %id, total = state.quotes.len(), "Stored quote");
        Ok(quote)
    }

    async fn list(&self) -> QuoteResult<Vec<Quote>> {
        let state = self.state.lock()?;
        Ok(state.quotes.clone())
    }

    async fn list_by_author(&self, author: &Author) -> QuoteResult<Vec<Quote>> {
        let state = self.state.lock()?;
        let matches: Vec<Quote> = state
            .quotes
            .iter()
            .filter(|quote| quote.is_by(author))
            .cloned()
            .collect();

        tracing::debug!(author = %author, matches = matches.len(), "Filtered quotes by author");
        Ok(matches)
    }

    async fn delete(&self, id: QuoteId) -> QuoteResult<bool> {
        let mut state = self.state.lock()?;

        // `Vec::remove` shifts the tail, keeping insertion order
        match state.quotes.iter().position(|quote| quote.id == id) {
            Some(index) => {
                state.quotes.remove(index);
                tracing::debug!(quote_id = %id, total = state.quotes.len(), "Removed quote");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
