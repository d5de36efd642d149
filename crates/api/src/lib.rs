//! HTTP API: configuration, routing, and the product filter pipeline.

pub mod app;
pub mod config;
pub mod middleware;
