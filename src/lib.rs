//! Leads API: CRUD REST endpoints for sales leads and pipelines.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod resources;
pub mod response;
pub mod routes;
pub mod sanitize;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use resources::{Lead, Pipeline, Resource};
pub use routes::{api_routes, build_app, common_routes, resource_routes};
pub use service::ResourceService;
pub use state::AppState;
pub use store::{Datastore, MemoryStore, PgStore, Row};
