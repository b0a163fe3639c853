//! Database layer - connection pool, startup DDL, and repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::DbError;
