//! Traced CRUD service library.
//!
//! An Axum service exposing a dice roller and CRUD over an in-memory
//! resource store, with every handler wrapped in a tracing span.

pub mod config;
pub mod dice;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resources;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
