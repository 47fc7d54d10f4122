//! Shared types for the Dar Al Achab reservation system
//!
//! Canonical reservation model and wire DTOs used by both the admin
//! HTTP client and the dashboard core.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    PRICE_PER_PERSON_DH, Reservation, ReservationPersonsUpdate, ReservationStatus,
    ReservationStatusUpdate,
};
