//! Snippet repository
//!
//! Three operations over the snippets table: insert, get-by-id, and the
//! latest listing. Expired rows are never deleted; the read queries simply
//! exclude them.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// How many rows the latest listing returns.
const LATEST_LIMIT: i64 = 10;

/// Snippet record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Snippet repository
pub struct SnippetRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SnippetRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a snippet expiring `expiry_days` from now, returning its id.
    ///
    /// Both timestamps come from the database clock in a single statement,
    /// so `expires` is exactly `created + expiry_days` days. No validation
    /// happens here; callers hand in already-validated values.
    pub async fn insert(
        &self,
        title: &str,
        content: &str,
        expiry_days: i32,
    ) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES ($1, $2, now(), now() + make_interval(days => $3))
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(expiry_days)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch one non-expired snippet by id.
    ///
    /// An absent or already-expired row is reported as `NotFound`, distinct
    /// from connection or scan failures, so callers can answer with 404.
    pub async fn get(&self, id: i64) -> Result<Snippet, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > now() AND id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "snippet",
            id: id.to_string(),
        })
    }

    /// List up to 10 non-expired snippets, newest first.
    ///
    /// Returns an empty vec when nothing is eligible. Ids are assigned by
    /// the database in insert order, so descending id is newest-first.
    pub async fn latest(&self) -> Result<Vec<Snippet>, DbError> {
        let snippets = sqlx::query_as(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > now()
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests share the snippets table, so run them serially:
    // DATABASE_URL=postgres://... cargo test -p snipbin-server -- --ignored --test-threads=1

    async fn fresh_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        sqlx::query("TRUNCATE snippets RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_round_trip() {
        let pool = fresh_pool().await;
        let repo = SnippetRepo::new(&pool);

        let id = repo
            .insert("Title A", "Body A", 7)
            .await
            .expect("insert failed");
        assert_eq!(id, 1);

        let snippet = repo.get(id).await.expect("get failed");
        assert_eq!(snippet.id, id);
        assert_eq!(snippet.title, "Title A");
        assert_eq!(snippet.content, "Body A");
        assert_eq!(snippet.expires - snippet.created, chrono::Duration::days(7));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_id_is_not_found() {
        let pool = fresh_pool().await;
        let repo = SnippetRepo::new(&pool);

        let err = repo.get(42).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "snippet",
                ..
            }
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_expired_snippet_is_not_found() {
        let pool = fresh_pool().await;
        let repo = SnippetRepo::new(&pool);

        // Zero-day expiry means the row is already dead by the next statement.
        let id = repo
            .insert("Gone", "already expired", 0)
            .await
            .expect("insert failed");

        let err = repo.get(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn latest_on_empty_table_is_empty() {
        let pool = fresh_pool().await;
        let repo = SnippetRepo::new(&pool);

        let latest = repo.latest().await.expect("latest failed");
        assert!(latest.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn latest_caps_at_ten_newest_first() {
        let pool = fresh_pool().await;
        let repo = SnippetRepo::new(&pool);

        let mut ids = Vec::new();
        for i in 0..11 {
            let id = repo
                .insert(&format!("Snippet {i}"), "body", 1)
                .await
                .expect("insert failed");
            ids.push(id);
        }

        let latest = repo.latest().await.expect("latest failed");
        assert_eq!(latest.len(), 10);

        // Newest of the eleven comes first; the oldest fell off the page.
        assert_eq!(latest[0].id, *ids.last().unwrap());
        assert!(latest.windows(2).all(|w| w[0].id > w[1].id));
        assert!(latest.iter().all(|s| s.expires > Utc::now()));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn latest_excludes_expired_rows() {
        let pool = fresh_pool().await;
        let repo = SnippetRepo::new(&pool);

        let expired = repo
            .insert("Expired", "body", 0)
            .await
            .expect("insert failed");
        let live = repo.insert("Live", "body", 1).await.expect("insert failed");

        let latest = repo.latest().await.expect("latest failed");
        assert!(latest.iter().any(|s| s.id == live));
        assert!(latest.iter().all(|s| s.id != expired));
    }
}
