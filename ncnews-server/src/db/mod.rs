//! Database layer - connection pool, error classification and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed pool, passed down through application state
//! - Listings aggregate with LEFT JOIN + GROUP BY (no N+1)
//! - Rely on DB constraints for references; classify their errors once
//! - Single-statement writes; the store provides atomicity

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
