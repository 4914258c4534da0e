//! HTTP Handlers

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::{
    CreateQuoteInput, CreateQuoteUseCase, DeleteQuoteUseCase, ListQuotesByAuthorUseCase,
    ListQuotesUseCase, RandomQuoteUseCase,
};
use crate::domain::entity::Quote;
use crate::domain::repository::QuoteRepository;
use crate::error::{QuoteError, QuoteResult};
use crate::presentation::dto::{CreateQuoteRequest, ListQuotesQuery, QuoteResponse};

/// Shared state for quote handlers
#[derive(Clone)]
pub struct QuotesAppState<R>
where
    R: QuoteRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /quotes
///
/// The body is decoded from raw bytes so the outcome depends only on the
/// payload, not on the `Content-Type` header.
pub async fn create_quote<R>(
    State(state): State<QuotesAppState<R>>,
    body: Bytes,
) -> QuoteResult<Response>
where
    R: QuoteRepository + Clone + Send + Sync + 'static,
{
    let req = CreateQuoteRequest::from_slice(&body).map_err(QuoteError::InvalidBody)?;

    let use_case = CreateQuoteUseCase::new(state.repo.clone());

    let quote = use_case
        .execute(CreateQuoteInput {
            text: req.text().to_string(),
            author: req.author,
        })
        .await?;

    json(StatusCode::CREATED, &QuoteResponse::from(quote))
}

/// GET /quotes and GET /quotes?author=X
pub async fn list_quotes<R>(
    State(state): State<QuotesAppState<R>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> QuoteResult<Response>
where
    R: QuoteRepository + Clone + Send + Sync + 'static,
{
    let Query(pairs) = query.map_err(|e| QuoteError::validation(e.body_text()))?;
    let query = ListQuotesQuery::from(pairs);

    let quotes = match query.author {
        Some(author) => {
            ListQuotesByAuthorUseCase::new(state.repo.clone())
                .execute(author)
                .await?
        }
        None => ListQuotesUseCase::new(state.repo.clone()).execute().await?,
    };

    json(StatusCode::OK, &to_responses(quotes))
}

/// GET /quotes/random
pub async fn random_quote<R>(State(state): State<QuotesAppState<R>>) -> QuoteResult<Response>
where
    R: QuoteRepository + Clone + Send + Sync + 'static,
{
    let quote = RandomQuoteUseCase::new(state.repo.clone()).execute().await?;

    json(StatusCode::OK, &QuoteResponse::from(quote))
}

/// DELETE /quotes/{id}
pub async fn delete_quote<R>(
    State(state): State<QuotesAppState<R>>,
    Path(raw_id): Path<String>,
) -> QuoteResult<StatusCode>
where
    R: QuoteRepository + Clone + Send + Sync + 'static,
{
    let id: i64 = raw_id
        .parse()
        .map_err(|_| QuoteError::validation(format!("Invalid quote id: {raw_id}")))?;

    DeleteQuoteUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_responses(quotes: Vec<Quote>) -> Vec<QuoteResponse> {
    quotes.into_iter().map(QuoteResponse::from).collect()
}

/// Encode `body` as a JSON response
///
/// Encoding is done here rather than through `axum::Json` so that a failure
/// surfaces as [`QuoteError::Serialization`].
fn json<T: Serialize>(status: StatusCode, body: &T) -> QuoteResult<Response> {
    let bytes = serde_json::to_vec(body).map_err(QuoteError::Serialization)?;

    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response())
}
