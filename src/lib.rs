pub mod db;
pub mod domain;
pub mod matching;
pub mod models;
pub mod processing;
pub mod repository;
pub mod schema;

/// Default similarity threshold for name matching when none is configured.
pub const SIMILARITY_THRESHOLD: f64 = 0.4;

/// Longest input, in characters, the edit-distance stage will accept.
pub const MAX_COMPARE_LEN: usize = 256;
