//! Export generators
//!
//! Both generators consume the same input: the arrived-only subset of the
//! currently visible rows, in view order. Row content is identical between
//! the two; only the container differs.

pub mod csv;
pub mod open;
pub mod print_doc;

pub use csv::{CsvExport, CSV_FILENAME};
pub use print_doc::PrintDocument;

use shared::Reservation;

/// Column values shared by both export formats. Zero persons and a zero
/// amount render as empty cells rather than "0".
pub(crate) fn row_cells(r: &Reservation) -> [String; 8] {
    [
        r.date.clone(),
        r.time.clone(),
        r.name.clone(),
        r.phone.clone(),
        r.email.clone().unwrap_or_default(),
        non_zero(r.persons),
        r.message.clone().unwrap_or_default(),
        non_zero(r.amount_dh()),
    ]
}

pub(crate) fn non_zero(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
