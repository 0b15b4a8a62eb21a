//! Schema setup for the snippets table

use sqlx::PgPool;

use super::repos::DbError;

/// Create the snippets table and its indexes if they do not exist.
///
/// Runs once at startup; safe to run against an already-provisioned
/// database.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running snippet migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS snippets (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created TIMESTAMPTZ NOT NULL,
            expires TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Read paths filter on expiry, never delete, so this is the only index
    // the table needs beyond the primary key.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_expires ON snippets (expires)")
        .execute(pool)
        .await?;

    Ok(())
}
