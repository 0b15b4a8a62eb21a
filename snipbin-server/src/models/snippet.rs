//! Snippet form field validation

use super::ValidationError;

/// Maximum length for snippet titles, counted in characters.
const MAX_TITLE_CHARS: usize = 100;

/// Validated snippet title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTitle(String);

impl SnippetTitle {
    /// Create a new snippet title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 100 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_CHARS,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SnippetTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated snippet body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetContent(String);

impl SnippetContent {
    /// Create a new snippet body. Must be non-empty after trimming.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SnippetContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated expiry period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDays(i32);

impl ExpiryDays {
    /// Permitted expiry periods, as offered on the create form.
    pub const CHOICES: [i32; 3] = [365, 7, 1];

    /// Create an expiry period. Only the form's choices are accepted.
    pub fn new(days: i32) -> Result<Self, ValidationError> {
        if Self::CHOICES.contains(&days) {
            Ok(Self(days))
        } else {
            Err(ValidationError::InvalidChoice {
                field: "expires",
                value: days.to_string(),
            })
        }
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }
}
