//! Admin dashboard state machine
//!
//! Owns the credential, the reservation store and the active view criteria,
//! and routes every mutation through the backend before the local copy is
//! considered authoritative. Two states: unauthenticated (no admin key) and
//! authenticated. A rejected key, reported by any operation, forces the
//! transition back to unauthenticated and clears the persisted session.
//!
//! There is deliberately no request coalescing: a second mutation for the
//! same id while one is in flight issues an independent request and the last
//! server response wins.

use achab_client::{ClientConfig, ClientError, HttpClient};
use chrono::NaiveDate;
use shared::{Reservation, ReservationStatus};
use std::path::Path;

use super::error::AdminError;
use super::session::SessionStore;
use super::store::ReservationStore;
use super::view::{self, DashboardStats, DateFilter, ViewCriteria};
use crate::export::{self, CsvExport, PrintDocument};

/// Result of a delete command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The operator declined the confirmation step; nothing was sent.
    Cancelled,
}

pub struct AdminDashboard {
    client: HttpClient,
    session: SessionStore,
    store: ReservationStore,
    criteria: ViewCriteria,
    admin_key: Option<String>,
}

impl AdminDashboard {
    pub fn new(config: &ClientConfig, data_dir: &Path) -> Self {
        Self {
            client: config.build_http_client(),
            session: SessionStore::new(data_dir),
            store: ReservationStore::new(),
            criteria: ViewCriteria::default(),
            admin_key: None,
        }
    }

    // ========== Session / auth gate ==========

    pub fn is_authenticated(&self) -> bool {
        self.admin_key.is_some()
    }

    /// Log in with a candidate admin key, validating it with a list fetch.
    ///
    /// On success the key is persisted for the next start and the store is
    /// populated with the response. A rejected key leaves the gate
    /// unauthenticated without persisting anything.
    pub async fn login(&mut self, admin_key: &str) -> Result<(), AdminError> {
        let admin_key = admin_key.trim();
        if admin_key.is_empty() {
            return Err(AdminError::MissingKey);
        }

        match self.client.list_reservations(admin_key).await {
            Ok(records) => {
                self.admin_key = Some(admin_key.to_string());
                if let Err(e) = self.session.save(admin_key) {
                    // Not fatal: the session just will not survive a restart.
                    tracing::warn!("Failed to persist session: {}", e);
                }
                self.store.replace_all(records);
                tracing::info!(count = self.store.len(), "Admin logged in");
                Ok(())
            }
            Err(ClientError::Unauthorized) => Err(AdminError::InvalidKey),
            Err(e) => Err(AdminError::Client(e)),
        }
    }

    /// Restore a persisted session, revalidating the key with a list fetch.
    ///
    /// Returns `Ok(false)` when no session is stored or the stored key is no
    /// longer accepted (the stale session is cleared). A connectivity failure
    /// keeps the restored session authenticated with an empty store and
    /// propagates the error.
    pub async fn restore(&mut self) -> Result<bool, AdminError> {
        let Some(stored) = self.session.load()? else {
            return Ok(false);
        };

        self.admin_key = Some(stored.admin_key);
        match self.refresh().await {
            Ok(()) => Ok(true),
            Err(AdminError::InvalidKey) => Ok(false),
            Err(e) => {
                tracing::warn!("Session restored but initial fetch failed: {}", e);
                Err(e)
            }
        }
    }

    /// Log out unconditionally: clear the key, the persisted session and the
    /// store.
    pub fn logout(&mut self) {
        self.force_logout();
        tracing::info!("Admin logged out");
    }

    fn force_logout(&mut self) {
        self.admin_key = None;
        self.store.clear();
        if let Err(e) = self.session.clear() {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
    }

    fn require_key(&self) -> Result<&str, AdminError> {
        self.admin_key.as_deref().ok_or(AdminError::NotAuthenticated)
    }

    /// Classify a remote failure. A rejected key logs the session out no
    /// matter which operation reported it.
    fn handle_client_error(&mut self, err: ClientError) -> AdminError {
        if err.is_unauthorized() {
            tracing::warn!("Admin key rejected; clearing session");
            self.force_logout();
            AdminError::InvalidKey
        } else {
            AdminError::Client(err)
        }
    }

    // ========== Reservation operations ==========

    /// Re-fetch the full collection and replace the store.
    pub async fn refresh(&mut self) -> Result<(), AdminError> {
        let key = self.require_key()?.to_string();
        match self.client.list_reservations(&key).await {
            Ok(records) => {
                self.store.replace_all(records);
                Ok(())
            }
            Err(e) => Err(self.handle_client_error(e)),
        }
    }

    /// Transition a reservation to a new status.
    pub async fn update_status(
        &mut self,
        id: &str,
        status: ReservationStatus,
    ) -> Result<(), AdminError> {
        let key = self.require_key()?.to_string();
        match self.client.update_status(&key, id, status).await {
            Ok(updated) => {
                self.store.upsert(updated);
                Ok(())
            }
            Err(e) => Err(self.handle_client_error(e)),
        }
    }

    /// Record an in-progress persons edit (display only, never transmitted).
    pub fn set_persons_draft(&mut self, id: &str, raw: impl Into<String>) {
        self.store.set_persons_draft(id, raw);
    }

    /// Commit the pending persons edit for `id`.
    ///
    /// A draft that does not parse as a non-negative integer stays local and
    /// the call is a silent no-op; the store's authoritative value remains
    /// the last server-confirmed one. On a remote failure the collection is
    /// re-fetched so the transient value is rolled back.
    pub async fn commit_persons(&mut self, id: &str) -> Result<(), AdminError> {
        let key = self.require_key()?.to_string();
        let Some(persons) = self.store.parse_persons_draft(id) else {
            return Ok(());
        };

        match self.client.update_persons(&key, id, persons).await {
            Ok(updated) => {
                self.store.upsert(updated);
                Ok(())
            }
            Err(e) => {
                let err = self.handle_client_error(e);
                if !matches!(err, AdminError::InvalidKey) {
                    if let Err(refresh_err) = self.refresh().await {
                        tracing::warn!("Rollback fetch failed: {}", refresh_err);
                    }
                }
                Err(err)
            }
        }
    }

    /// Delete a reservation. `confirmed` carries the result of the explicit
    /// confirmation step; without it no request is issued.
    pub async fn delete_reservation(
        &mut self,
        id: &str,
        confirmed: bool,
    ) -> Result<DeleteOutcome, AdminError> {
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        let key = self.require_key()?.to_string();
        match self.client.delete_reservation(&key, id).await {
            Ok(()) => {
                self.store.remove(id);
                tracing::info!(id = %id, "Reservation deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => Err(self.handle_client_error(e)),
        }
    }

    // ========== View ==========

    pub fn store(&self) -> &ReservationStore {
        &self.store
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    pub fn set_date_filter(&mut self, filter: DateFilter) {
        self.criteria.date_filter = filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    /// The filtered, sorted projection the UI renders, evaluated against the
    /// given calendar day.
    pub fn visible_on(&self, today: NaiveDate) -> Vec<&Reservation> {
        view::visible(self.store.records(), &self.criteria, today)
    }

    /// Same as [`Self::visible_on`] for the current local date.
    pub fn visible(&self) -> Vec<&Reservation> {
        self.visible_on(chrono::Local::now().date_naive())
    }

    pub fn stats_on(&self, today: NaiveDate) -> DashboardStats {
        view::stats(self.store.records(), today)
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats_on(chrono::Local::now().date_naive())
    }

    /// Footer total: billing sum over the arrived rows of the current view.
    pub fn visible_total_dh(&self) -> u32 {
        view::total_amount_dh(&self.visible())
    }

    // ========== Exports ==========

    /// Delimited-text export of the arrived subset of the current view;
    /// `None` when nothing qualifies (an informational no-op, not an error).
    pub fn export_csv_on(&self, today: NaiveDate) -> Option<CsvExport> {
        let rows = view::arrived_only(&self.visible_on(today));
        if rows.is_empty() {
            tracing::info!("No arrived reservations to export for the current filter");
            return None;
        }
        Some(export::csv::render(&rows))
    }

    pub fn export_csv(&self) -> Option<CsvExport> {
        self.export_csv_on(chrono::Local::now().date_naive())
    }

    /// Printable document over the same rows; `None` when nothing qualifies.
    pub fn export_print_document_on(&self, today: NaiveDate) -> Option<PrintDocument> {
        let rows = view::arrived_only(&self.visible_on(today));
        if rows.is_empty() {
            tracing::info!("No arrived reservations to export for the current filter");
            return None;
        }
        Some(export::print_doc::render(&rows))
    }

    pub fn export_print_document(&self) -> Option<PrintDocument> {
        self.export_print_document_on(chrono::Local::now().date_naive())
    }
}
