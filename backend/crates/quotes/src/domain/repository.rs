//! Repository Traits
//!
//! The quote store interface. Implementation is in infrastructure layer.

use crate::domain::entity::{NewQuote, Quote, QuoteId};
use crate::domain::value_object::Author;
use crate::error::QuoteResult;

/// Quote store
///
/// Implementations serialize every operation: each call observes all
/// earlier calls and none interleave.
#[trait_variant::make(QuoteRepository: Send)]
pub trait LocalQuoteRepository {
    /// Assign the next id, append, and return the stored quote
    async fn add(&self, quote: NewQuote) -> QuoteResult<Quote>;

    /// All quotes in insertion order
    async fn list(&self) -> QuoteResult<Vec<Quote>>;

    /// Quotes whose author is exactly `author`, in insertion order
    async fn list_by_author(&self, author: &Author) -> QuoteResult<Vec<Quote>>;

    /// Remove a quote; `false` if no quote has this id
    async fn delete(&self, id: QuoteId) -> QuoteResult<bool>;
}
