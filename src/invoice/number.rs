use chrono::{Datelike, NaiveDate};

use crate::api::Invoice;

/// Local replay of the backend's advisory numbering rule, used when the
/// next-number endpoint is unreachable. Numbers are YYYYMM## (8 chars);
/// the next sequence for the current month is max+1, else 01.
pub fn fallback_invoice_number(invoices: &[Invoice], today: NaiveDate) -> String {
    let prefix = format!("{:04}{:02}", today.year(), today.month());
    let next = invoices
        .iter()
        .filter_map(|inv| {
            let number = inv.invoice_number.as_str();
            if number.len() == 8 && number.starts_with(&prefix) {
                number[6..8].parse::<u32>().ok()
            } else {
                None
            }
        })
        .max()
        .map_or(1, |seq| seq + 1);
    format!("{prefix}{next:02}")
}
