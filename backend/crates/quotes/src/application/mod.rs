//! Application Layer - Use Cases
//!
//! One use case per HTTP operation. Each holds the repository and does the
//! field checks before touching it.

pub mod create_quote;
pub mod delete_quote;
pub mod list_quotes;
pub mod random_quote;

pub use create_quote::{CreateQuoteInput, CreateQuoteUseCase};
pub use delete_quote::DeleteQuoteUseCase;
pub use list_quotes::{ListQuotesByAuthorUseCase, ListQuotesUseCase};
pub use random_quote::RandomQuoteUseCase;
