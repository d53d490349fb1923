pub mod config;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod providers;
pub mod routes;
pub mod state;

pub use axum;
pub use serde_json;
