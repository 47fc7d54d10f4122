//! CSV export
//!
//! Plain comma-separated text with every field quoted, so free-text cells
//! (messages with commas or line breaks) survive any spreadsheet import.
//! The last row carries the billing total for the exported subset.

use shared::Reservation;

use super::{non_zero, row_cells};
use crate::core::view;

pub const CSV_FILENAME: &str = "reservations_dar_al_achab.csv";

const HEADERS: [&str; 8] = [
    "Date",
    "Heure",
    "Nom",
    "Téléphone",
    "Email",
    "Personnes",
    "Message",
    "Montant (DH)",
];

/// A rendered CSV export ready to be written to disk
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: &'static str,
    pub content: String,
}

impl CsvExport {
    /// Write the export under `dir` using the fixed filename.
    pub fn write_to(&self, dir: &std::path::Path) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(self.filename);
        std::fs::write(&path, &self.content)?;
        tracing::info!(path = %path.display(), "CSV export written");
        Ok(path)
    }
}

fn escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| escape(c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the arrived rows into CSV text, trailing total included.
pub fn render(rows: &[&Reservation]) -> CsvExport {
    let total = view::total_amount_dh(rows);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(&HEADERS.map(String::from)));
    for r in rows {
        lines.push(line(&row_cells(r)));
    }

    let mut total_row = vec![String::new(); 6];
    total_row.push("Total".to_string());
    total_row.push(non_zero(total));
    lines.push(line(&total_row));

    CsvExport {
        filename: CSV_FILENAME,
        content: lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ReservationStatus;

    fn arrived(id: &str, name: &str, persons: u32) -> Reservation {
        Reservation {
            id: id.to_string(),
            name: name.to_string(),
            phone: "0612345678".to_string(),
            email: Some("ali@example.ma".to_string()),
            date: "2026-09-01".to_string(),
            time: "20:00".to_string(),
            persons,
            message: None,
            status: ReservationStatus::Arrived,
            timestamp: None,
        }
    }

    #[test]
    fn test_render_headers_rows_and_total() {
        let a = arrived("a", "Ali Ben", 2);
        let b = arrived("b", "Sara", 3);
        let export = render(&[&a, &b]);

        assert_eq!(export.filename, CSV_FILENAME);
        let lines: Vec<&str> = export.content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("\"Date\",\"Heure\",\"Nom\""));
        assert!(lines[1].contains("\"Ali Ben\""));
        assert!(lines[1].ends_with("\"400\""));
        assert!(lines[2].ends_with("\"600\""));
        assert_eq!(lines[3], "\"\",\"\",\"\",\"\",\"\",\"\",\"Total\",\"1000\"");
    }

    #[test]
    fn test_zero_persons_render_as_empty_cells() {
        let r = arrived("a", "Ali Ben", 0);
        let export = render(&[&r]);
        let lines: Vec<&str> = export.content.lines().collect();

        // Zero persons means zero amount; both cells are empty, not "0"
        assert!(lines[1].ends_with("\"\",\"\",\"\""));
        assert!(lines[2].ends_with("\"Total\",\"\""));
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_escaped() {
        let mut r = arrived("a", "Ben, Ali \"Junior\"", 2);
        r.message = Some("Table près de la fenêtre, svp".to_string());
        let export = render(&[&r]);
        let lines: Vec<&str> = export.content.lines().collect();

        assert!(lines[1].contains("\"Ben, Ali \"\"Junior\"\"\""));
        assert!(lines[1].contains("\"Table près de la fenêtre, svp\""));
        // Quoting keeps the row a single logical line
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let r = arrived("a", "Ali Ben", 2);
        let path = render(&[&r]).write_to(dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), CSV_FILENAME);
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\"Ali Ben\""));
    }
}
