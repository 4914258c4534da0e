//! Quotes Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::domain::repository::QuoteRepository;
use crate::infra::memory::InMemoryQuoteRepository;
use crate::presentation::handlers::{self, QuotesAppState};

/// Create the quotes router backed by the in-memory store
pub fn quotes_router(repo: InMemoryQuoteRepository) -> Router {
    quotes_router_generic(repo)
}

/// Create a quotes router for any repository implementation
pub fn quotes_router_generic<R>(repo: R) -> Router
where
    R: QuoteRepository + Clone + Send + Sync + 'static,
{
    let state = QuotesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/quotes",
            get(handlers::list_quotes::<R>).post(handlers::create_quote::<R>),
        )
        // Static segment wins over the `{id}` capture in axum's matcher
        .route("/quotes/random", get(handlers::random_quote::<R>))
        .route("/quotes/{id}", delete(handlers::delete_quote::<R>))
        .with_state(state)
}
