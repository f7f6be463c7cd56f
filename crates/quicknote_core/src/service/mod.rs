//! Session orchestration services.
//!
//! # Responsibility
//! - Route surface events, coalesce save requests, and drive the session
//!   lifecycle over the snapshot store.

pub mod debounce;
pub mod router;
pub mod session;
