//! Printable HTML document
//!
//! Self-contained page with inline styles and an onload script that opens
//! the browser print dialog, so handing the file to any browser yields a
//! paper copy with no further clicks.

use shared::Reservation;

use super::row_cells;
use crate::core::view;

pub const DOCUMENT_TITLE: &str = "Réservations - Dar Al Achab";

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

/// A rendered printable document
#[derive(Debug, Clone)]
pub struct PrintDocument {
    pub title: &'static str,
    pub html: String,
}

impl PrintDocument {
    /// Write the document to a temp file and hand it to the system browser.
    pub fn open(&self) -> std::io::Result<std::path::PathBuf> {
        super::open::open_html(&self.html)
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the arrived rows into a printable HTML page.
pub fn render(rows: &[&Reservation]) -> PrintDocument {
    let total = view::total_amount_dh(rows);

    let mut html = String::with_capacity(2048 + rows.len() * 256);
    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(DOCUMENT_TITLE)));
    html.push_str(
        "<style>\n\
         body { font-family: Arial, sans-serif; margin: 24px; }\n\
         h1 { font-size: 18px; }\n\
         table { width: 100%; border-collapse: collapse; }\n\
         th, td { border: 1px solid #333; padding: 6px 8px; font-size: 12px; text-align: left; }\n\
         th { background: #eee; }\n\
         tfoot td { font-weight: bold; }\n\
         </style>\n",
    );
    html.push_str("</head>\n<body onload=\"window.print()\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(DOCUMENT_TITLE)));

    html.push_str("<table>\n<thead>\n<tr>");
    for h in HEADERS {
        html.push_str(&format!("<th>{}</th>", escape_html(h)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for r in rows {
        html.push_str("<tr>");
        for cell in row_cells(r) {
            html.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n<tfoot>\n<tr>");
    html.push_str("<td colspan=\"7\" style=\"text-align: right;\">Total :</td>");
    html.push_str(&format!("<td>{} DH</td>", total));
    html.push_str("</tr>\n</tfoot>\n</table>\n</body>\n</html>\n");

    PrintDocument {
        title: DOCUMENT_TITLE,
        html,
    }
}
