pub mod config;
pub mod downloads;
pub mod models;
pub mod providers;
pub mod routes;
pub mod views;
