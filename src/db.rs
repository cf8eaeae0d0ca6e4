//! SQLite connection pool and schema bootstrap.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS colleges (
    name TEXT PRIMARY KEY NOT NULL,
    location TEXT,
    accommodations TEXT,
    resources TEXT
);

CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    college_name TEXT NOT NULL,
    identities_list TEXT NOT NULL DEFAULT '',
    race TEXT NOT NULL DEFAULT '',
    disability_identity TEXT NOT NULL DEFAULT '',
    gender TEXT NOT NULL DEFAULT '',
    sexual_orientation TEXT NOT NULL DEFAULT '',
    optin TEXT NOT NULL DEFAULT '',
    lgbtq_id TEXT NOT NULL DEFAULT '',
    lgbtq_safety INTEGER,
    exclusionary TEXT NOT NULL DEFAULT '',
    friendly TEXT NOT NULL DEFAULT '',
    accommodations_difficulty INTEGER,
    reliability_rating INTEGER,
    timeliness TEXT NOT NULL DEFAULT '',
    accommodation_rating INTEGER,
    mobility TEXT NOT NULL DEFAULT '',
    outside_rating INTEGER,
    inside_accessibility INTEGER,
    liberal_rating INTEGER,
    diversity_rating INTEGER,
    tolerance_rating INTEGER,
    supportive_rating INTEGER,
    clubs_rating INTEGER,
    overall_access_rating INTEGER,
    overall_identity_rating INTEGER,
    general_review TEXT NOT NULL DEFAULT '',
    identity_review TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS reviews_college_name ON reviews (college_name);
";

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("schema setup failed: {0}")]
    Schema(#[from] diesel::result::Error),
}

#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a pool for `database_url` and makes sure the tables exist.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)?;

    let mut conn = pool.get()?;
    conn.batch_execute(SCHEMA)?;

    Ok(pool)
}
