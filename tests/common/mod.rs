//! Helpers for integration tests.

use college_search::db::{DbPool, establish_connection_pool};
use college_search::models::college::College;
use tempfile::TempDir;

/// Temporary database used in integration tests.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 temp path"))
            .expect("Failed to establish SQLite connection.");
        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn college(name: &str, location: &str) -> College {
    College {
        name: name.to_string(),
        location: Some(location.to_string()),
        accommodations: None,
        resources: None,
    }
}
