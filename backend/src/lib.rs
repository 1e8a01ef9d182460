//! Body measurement API
//!
//! Accepts body photos plus height and weight over multipart and answers with
//! placeholder measurements.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Placeholder estimator and number handling
pub mod measurement;

/// HTTP middleware
pub mod middleware;

/// Route handlers
pub mod routes;

/// Router assembly and server startup
pub mod server;

/// Configuration and error types
pub mod types;

/// Multipart photo uploads
pub mod upload;
