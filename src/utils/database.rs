use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Builds the connection pool once at startup; every store call checks a
/// connection out of it for the duration of that call.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
