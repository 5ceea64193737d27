//! HTTP surface of the project workflow and accounting service.
//!
//! Exposes config, state, error handling, routes and background jobs so
//! integration tests and the binary entrypoint share them.

pub mod auth;
pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
