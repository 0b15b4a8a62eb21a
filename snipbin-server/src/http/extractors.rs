//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a snippet id from the path.
///
/// A path segment that isn't a positive integer answers 404 rather than a
/// decoder error, the same as an id that matches no row.
pub struct SnippetId(pub i64);

impl<S> FromRequestParts<S> for SnippetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        if id < 1 {
            return Err(ApiError::NotFound);
        }

        Ok(Self(id))
    }
}
