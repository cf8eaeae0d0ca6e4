pub mod college;
pub mod config;
pub mod review;
