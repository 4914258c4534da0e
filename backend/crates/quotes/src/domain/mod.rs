//! Domain Layer - Business rules and entities
//!
//! This layer contains:
//! - Domain entities (Quote, NewQuote)
//! - Domain value objects (Author, QuoteText)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
pub mod value_object;
