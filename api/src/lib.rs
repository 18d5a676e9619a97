pub mod auth_middleware;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod request_logger;
pub mod respond;
pub mod routes;
pub mod state;
pub mod user_handlers;
