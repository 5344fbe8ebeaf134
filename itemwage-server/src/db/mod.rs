//! Database layer - connection pool, schema, session and repositories
//!
//! # Design Principles
//!
//! - One pooled connection per in-flight request (`DbSession`)
//! - Repositories borrow that connection instead of owning a pool
//! - Single-statement mutations with RETURNING, committed explicitly

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod session;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use session::DbSession;
