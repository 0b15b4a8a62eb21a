//! Domain models and validation
//!
//! The store layer takes plain values; these newtypes are where form input
//! gets checked before it reaches the database.

pub mod snippet;
pub mod validation;

pub use snippet::{ExpiryDays, SnippetContent, SnippetTitle};
pub use validation::ValidationError;
