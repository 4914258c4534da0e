//! Quotes Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - In-memory store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! - The store is the single source of truth and is injected into the router
//! - One lock serializes every store operation
//! - Ids start at 1, increase by one per add, and are never reused
//! - Reads return copies; callers never alias stored quotes

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::{NewQuote, Quote, QuoteId};
pub use domain::repository::QuoteRepository;
pub use error::{QuoteError, QuoteResult};
pub use infra::memory::InMemoryQuoteRepository;
pub use presentation::router::{quotes_router, quotes_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
