pub mod config;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod utils;
