use thiserror::Error;

use crate::db::{DbConnection, DbPool};
use crate::models::college::College;
use crate::models::review::{NewReview, Review};

pub mod college;
pub mod review;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Diesel-backed store for the college catalog and its reviews.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait CollegeReader {
    /// All colleges, alphabetically by name.
    fn list_colleges(&self) -> RepositoryResult<Vec<College>>;
    fn get_college(&self, name: &str) -> RepositoryResult<Option<College>>;
    /// The search catalog: every college name, alphabetically.
    fn list_college_names(&self) -> RepositoryResult<Vec<String>>;
}

/// Fills the catalog. The worker exposes this through `AddColleges`.
pub trait CollegeWriter {
    fn create_colleges(&self, colleges: &[College]) -> RepositoryResult<usize>;
}

pub trait ReviewReader {
    fn list_reviews(&self, college_name: &str) -> RepositoryResult<Vec<Review>>;
}

pub trait ReviewWriter {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<usize>;
}
