//! Dar Al Achab admin dashboard core
//!
//! Client-side reservation management: session/auth gate, in-memory store,
//! filter/sort view derivation and export generation. The rendering layer is
//! a collaborator; this crate owns the data flow.

pub mod core;
pub mod export;

pub use self::core::{
    AdminDashboard, AdminError, DashboardStats, DateFilter, DeleteOutcome, ReservationStore,
    SessionError, SessionStore, ViewCriteria,
};
pub use export::{CSV_FILENAME, CsvExport, PrintDocument};
