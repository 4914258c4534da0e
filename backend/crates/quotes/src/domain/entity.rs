//! Domain Entities
//!
//! Core business entities for the quote domain.

use kernel::id::{Id, markers};

use crate::domain::value_object::{Author, QuoteText};

/// Store-assigned quote identifier (1, 2, 3, ...; never reused)
pub type QuoteId = Id<markers::Quote>;

/// A validated quote that has not been stored yet
///
/// This is the only input the repository accepts, so nothing unvalidated
/// can reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub author: Author,
    pub text: QuoteText,
}

impl NewQuote {
    pub fn new(author: Author, text: QuoteText) -> Self {
        Self { author, text }
    }

    /// Attach the id assigned by the store
    pub fn into_quote(self, id: QuoteId) -> Quote {
        Quote {
            id,
            author: self.author,
            text: self.text,
        }
    }
}

/// Quote entity - an author/text pair with a unique id
///
/// Immutable once stored. Repositories hand out clones, so changing a
/// returned value never touches the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: QuoteId,
    pub author: Author,
    pub text: QuoteText,
}

impl Quote {
    pub fn is_by(&self, author: &Author) -> bool {
        self.author == *author
    }
}
