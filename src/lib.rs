//! Movie picker service: a pre-computed catalog served through a JSON API
//! with nearest-neighbor recommendations and random sampling.

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
