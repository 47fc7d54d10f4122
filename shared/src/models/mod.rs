//! Data models
//!
//! Shared between the dashboard core and the backend API (via JSON).
//! Reservation ids are opaque strings assigned by the backend.

pub mod reservation;

// Re-exports
pub use reservation::*;
