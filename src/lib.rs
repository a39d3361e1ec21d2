//! Trivia API: PostgreSQL-backed REST backend for a trivia application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::ApiError;
pub use pagination::{paginate, PAGE_SIZE};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_trivia_tables, seed_default_categories};
