//! itemwage-server: HTTP service for wage prediction and an item store
//!
//! `POST /predict_wage` is a pure computation over startup constants;
//! `/items` is CRUD over a single SQLite table with one pooled connection
//! per request.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
