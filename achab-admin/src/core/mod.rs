//! Core dashboard components
//!
//! - SessionStore: persisted admin session (the auth gate's credential)
//! - ReservationStore: in-memory source of truth for the reservation list
//! - view: pure filter/sort/statistics derivation
//! - AdminDashboard: facade wiring client, session, store and view together

pub mod dashboard;
pub mod error;
pub mod session;
pub mod store;
pub mod view;

pub use dashboard::{AdminDashboard, DeleteOutcome};
pub use error::AdminError;
pub use session::{SessionError, SessionStore, StoredSession};
pub use store::ReservationStore;
pub use view::{DashboardStats, DateFilter, ViewCriteria};
