//! Delete Quote Use Case

use std::sync::Arc;

use crate::domain::entity::QuoteId;
use crate::domain::repository::QuoteRepository;
use crate::error::{QuoteError, QuoteResult};

/// Delete Quote Use Case
pub struct DeleteQuoteUseCase<R>
where
    R: QuoteRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteQuoteUseCase<R>
where
    R: QuoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Delete by the integer taken from the path.
    ///
    /// Zero and negative values are valid integers that can never name a
    /// stored quote, so they are reported as not found.
    pub async fn execute(&self, raw_id: i64) -> QuoteResult<()> {
        let id = QuoteId::from_signed(raw_id).ok_or_else(|| QuoteError::quote_not_found(raw_id))?;

        if !self.repo.delete(id).await? {
            return Err(QuoteError::quote_not_found(id));
        }

        tracing::info!(quote_id = %id, "Deleted quote");
        Ok(())
    }
}
