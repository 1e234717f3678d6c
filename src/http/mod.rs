//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request ID assigned (x-request-id), request span opened
//!     → handlers/ (dice, resource CRUD, diagnostics)
//!     → error.rs (ApiError → status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{build_router, HttpServer};
