//! In-memory resource storage.
//!
//! # Data Flow
//! ```text
//! handler
//!     → ResourceStore<R> (shared Arc<Mutex<Vec<R>>>)
//!     → Resource trait decides how fields are built and patched
//!     → record (or StoreError::NotFound) back to the handler
//! ```
//!
//! # Design Decisions
//! - Ordered Vec: insertion order preserved, deletion removes in place
//! - Ids are `max + 1`, so deleting the highest id and inserting reuses it
//! - One mutex per store; no lock is held across an `.await`

pub mod memory;
pub mod resource;

pub use memory::{ResourceStore, StoreError, StoreResult};
pub use resource::Resource;
