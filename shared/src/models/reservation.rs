//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Billing rate applied to arrived reservations, in dirhams per person.
pub const PRICE_PER_PERSON_DH: u32 = 200;

/// Lifecycle status of a reservation.
///
/// Wire tokens match the backend: `en_attente`, `confirme`, `arrive`.
/// A missing, null or unknown token folds to `Pending` during
/// deserialization, so no ingestion path can hold an undefined status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Arrived,
}

impl ReservationStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ReservationStatus; 3] = [Self::Pending, Self::Confirmed, Self::Arrived];

    /// Parse a wire token, folding unknown values to `Pending`.
    pub fn from_wire(token: &str) -> Self {
        match token {
            "confirme" => Self::Confirmed,
            "arrive" => Self::Arrived,
            _ => Self::Pending,
        }
    }

    /// Token sent to and received from the backend.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "en_attente",
            Self::Confirmed => "confirme",
            Self::Arrived => "arrive",
        }
    }

    /// French display label, as shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "EN ATTENTE",
            Self::Confirmed => "CONFIRMÉ",
            Self::Arrived => "ARRIVÉ",
        }
    }
}

impl Serialize for ReservationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Null and unknown tokens both normalize to Pending.
        let token = Option::<String>::deserialize(deserializer)?;
        Ok(token.as_deref().map(Self::from_wire).unwrap_or_default())
    }
}

/// A table-booking request: contact info, schedule, party size and status.
///
/// Created by the public reservation form; the dashboard only ever receives
/// records through the admin list fetch and mutation responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Calendar date as `YYYY-MM-DD`; may be empty on legacy records.
    #[serde(default)]
    pub date: String,
    /// Wall-clock time, display only.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub persons: u32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
    /// Creation instant; orders the admin list newest-first when present.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Billing amount in dirhams.
    ///
    /// Nonzero only once the party has arrived: `persons * PRICE_PER_PERSON_DH`
    /// for an `Arrived` reservation with at least one person, `0` otherwise.
    pub fn amount_dh(&self) -> u32 {
        if self.status == ReservationStatus::Arrived && self.persons > 0 {
            self.persons * PRICE_PER_PERSON_DH
        } else {
            0
        }
    }
}

/// Status update payload (`PATCH /api/reservations/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
}

/// Persons update payload (`PATCH /api/reservations/{id}/persons`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationPersonsUpdate {
    pub persons: u32,
}
