//! Framework glue shared by the Restful services.
//!
//! Configuration loading, tracing setup, HTTP middleware, lenient request
//! extractors and the router-level fallback responses.

pub mod config;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod response;
pub mod tracing;
