use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

// Build the PostgreSQL pool for the customer service. Acquires time out
// quickly so a stalled database shows up as storage errors, not hung requests.
pub async fn connect_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

// Apply pending schema migrations at startup.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
    MIGRATOR.run(pool).await
}
