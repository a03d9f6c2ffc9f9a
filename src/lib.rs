pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod validation;
pub mod views;
