//! Database connection pool
//!
//! One shared sqlx PgPool per process; repositories borrow it per call.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Maximum connections held by the pool.
/// Kept low for a small single-node application.
const MAX_CONNECTIONS: u32 = 5;

/// Open a connection pool against the given DSN and verify it with a ping.
///
/// A bad address or credentials fail here, at startup, rather than on the
/// first request.
///
/// # Errors
///
/// Returns an error if the connection or the ping fails.
pub async fn create_pool(dsn: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(dsn)
        .await?;

    // Round trip before handing the pool out, mirroring a connect-time ping.
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p snipbin-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_pool_pings() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let (n,): (i32,) = sqlx::query_as("SELECT 41 + 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(n, 42);
    }

    #[tokio::test]
    async fn create_pool_rejects_bad_dsn() {
        // Parse failure is immediate, no listener needed.
        let result = create_pool("not-a-dsn").await;
        assert!(result.is_err());
    }
}
