//! Value Objects
//!
//! Required quote fields. Both reject the empty string and nothing else:
//! no trimming, no case folding, no length limit.

use std::fmt;

use crate::error::{QuoteError, QuoteResult};

/// Quote author, compared by exact (case-sensitive) equality
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author(String);

impl Author {
    pub fn new(value: impl Into<String>) -> QuoteResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(QuoteError::validation("Author must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quote body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteText(String);

impl QuoteText {
    pub fn new(value: impl Into<String>) -> QuoteResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(QuoteError::validation("Text must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
