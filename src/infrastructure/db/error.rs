use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("the database pool is not connected")]
    NotConnected,

    #[error("failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),
}
