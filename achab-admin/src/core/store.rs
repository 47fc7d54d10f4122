//! In-memory reservation store
//!
//! Single source of truth for the dashboard. Records stay in the order the
//! backend returned them; ordering for display is applied by the view
//! derivation, not here. Status normalization (missing/unknown -> pending)
//! already happened when the records were deserialized, so every record held
//! here carries one of the three valid statuses.

use shared::Reservation;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ReservationStore {
    records: Vec<Reservation>,
    /// Transient persons edits keyed by reservation id. The only place an
    /// empty or non-numeric value may live; never sent to the backend.
    drafts: HashMap<String, String>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replacement after a full list fetch; discards all drafts.
    pub fn replace_all(&mut self, records: Vec<Reservation>) {
        self.records = records;
        self.drafts.clear();
    }

    /// Insert or overwrite by id with an authoritative record.
    pub fn upsert(&mut self, record: Reservation) {
        self.drafts.remove(&record.id);
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Delete by id; no-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.drafts.remove(id);
        self.records.retain(|r| r.id != id);
    }

    /// Drop all records and drafts.
    pub fn clear(&mut self) {
        self.records.clear();
        self.drafts.clear();
    }

    pub fn records(&self) -> &[Reservation] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========== Transient persons edits ==========

    /// Record an in-progress persons edit without validating it.
    pub fn set_persons_draft(&mut self, id: &str, raw: impl Into<String>) {
        self.drafts.insert(id.to_string(), raw.into());
    }

    /// The value the UI should display for the persons field: the draft when
    /// one exists, the authoritative value otherwise.
    pub fn persons_display(&self, id: &str) -> Option<String> {
        if let Some(draft) = self.drafts.get(id) {
            return Some(draft.clone());
        }
        self.get(id).map(|r| r.persons.to_string())
    }

    /// Validated commit value for a draft: a non-negative integer, or `None`
    /// when there is no draft or it does not parse. An invalid draft stays in
    /// place until the user corrects it.
    pub fn parse_persons_draft(&self, id: &str) -> Option<u32> {
        self.drafts.get(id)?.trim().parse().ok()
    }

    pub fn clear_draft(&mut self, id: &str) {
        self.drafts.remove(id);
    }
}
