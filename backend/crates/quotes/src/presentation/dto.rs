//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entity::{Quote, QuoteId};

/// Request for POST /quotes
///
/// Missing fields decode as empty so they fail validation
/// (400 with a field message) rather than body parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: Option<String>,
    /// Older clients send the body as `quote`
    #[serde(default)]
    pub quote: Option<String>,
}

impl CreateQuoteRequest {
    /// Decode a raw request body
    ///
    /// Only a JSON object is a quote payload; arrays and scalars are rejected
    /// before any field is looked at.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Quote body, preferring `text` over `quote`
    pub fn text(&self) -> &str {
        self.text
            .as_deref()
            .or(self.quote.as_deref())
            .unwrap_or_default()
    }
}

/// Query for GET /quotes
///
/// Decoded from raw pairs so a repeated `author` keeps its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuotesQuery {
    pub author: Option<String>,
}

impl From<Vec<(String, String)>> for ListQuotesQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let author = pairs
            .into_iter()
            .find(|(key, _)| key == "author")
            .map(|(_, value)| value);
        Self { author }
    }
}

/// A stored quote as returned by every read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: QuoteId,
    pub author: String,
    pub text: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            author: quote.author.into_inner(),
            text: quote.text.into_inner(),
        }
    }
}
