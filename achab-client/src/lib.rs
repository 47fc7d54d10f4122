//! Achab Client - HTTP client for the reservation backend
//!
//! Provides the admin-authenticated HTTP calls the dashboard consumes.
//! Every privileged request carries the shared admin key as the
//! `x-admin-key` header; responses are classified into success, an
//! invalid-credential signal, or a generic failure.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ADMIN_KEY_HEADER, HttpClient};

// Re-export shared types for convenience
pub use shared::{Reservation, ReservationPersonsUpdate, ReservationStatus, ReservationStatusUpdate};
