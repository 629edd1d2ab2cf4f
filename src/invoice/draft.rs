use chrono::NaiveDate;
use std::path::PathBuf;

use crate::api::{InvoicePayload, LineItem};
use crate::error::{InvoiceError, Result};

/// A line item as staged during authoring. A blank group name means
/// ungrouped; it is normalized away when the wire payload is built.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub description: String,
    pub rate: f64,
    pub quantity: f64,
    pub unit: String,
    pub group_name: String,
}

impl DraftItem {
    pub fn amount(&self) -> f64 {
        self.rate * self.quantity
    }
}

/// Parse item input like "Consulting:650:3:days" or
/// "Flight AMS-SFO:420:1:flat:Expenses" into a staged line item.
pub fn parse_item_input(input: &str) -> Result<DraftItem> {
    let parts: Vec<&str> = input.splitn(5, ':').collect();
    if parts.len() < 4 {
        return Err(InvoiceError::InvalidItemFormat(input.to_string()));
    }

    let description = parts[0].trim().to_string();

    let rate: f64 = parts[1].trim().parse().map_err(|_| InvoiceError::InvalidRate {
        item: description.clone(),
        rate: parts[1].trim().to_string(),
        reason: "must be a number".to_string(),
    })?;

    let quantity: f64 = parts[2]
        .trim()
        .parse()
        .map_err(|_| InvoiceError::InvalidQuantity {
            item: description.clone(),
            qty: parts[2].trim().to_string(),
            reason: "must be a number".to_string(),
        })?;

    let unit = parts[3].trim().to_string();
    let group_name = parts
        .get(4)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    Ok(DraftItem {
        description,
        rate,
        quantity,
        unit,
        group_name,
    })
}

/// In-memory draft of an invoice being authored: the selected party, the
/// human invoice number, the issue date, staged line items and attachments.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub party_id: Option<i64>,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub payment_term: Option<String>,
    pub items: Vec<DraftItem>,
    pub attachments: Vec<PathBuf>,
}

impl InvoiceDraft {
    pub fn total(&self) -> f64 {
        self.items.iter().map(DraftItem::amount).sum()
    }

    /// Field-level checks that do not depend on party resolution: at least
    /// one item, and every item with a description, a positive rate and
    /// quantity, and a unit.
    pub fn validate_items(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(InvoiceError::NoItems);
        }
        for (idx, item) in self.items.iter().enumerate() {
            let index = idx + 1;
            if item.description.trim().is_empty() {
                return Err(InvoiceError::InvalidLineItem {
                    index,
                    reason: "description must not be empty".to_string(),
                });
            }
            if item.rate <= 0.0 {
                return Err(InvoiceError::InvalidLineItem {
                    index,
                    reason: "rate must be greater than 0".to_string(),
                });
            }
            if item.quantity <= 0.0 {
                return Err(InvoiceError::InvalidLineItem {
                    index,
                    reason: "quantity must be greater than 0".to_string(),
                });
            }
            if item.unit.trim().is_empty() {
                return Err(InvoiceError::InvalidLineItem {
                    index,
                    reason: "unit must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.party_id.is_none() {
            return Err(InvoiceError::NoPartySelected);
        }
        self.validate_items()
    }

    /// Build the wire payload. Validates first; blank group names are
    /// normalized to absent.
    pub fn payload(&self) -> Result<InvoicePayload> {
        self.validate()?;
        let party_id = self.party_id.ok_or(InvoiceError::NoPartySelected)?;
        Ok(InvoicePayload {
            invoice_number: self.invoice_number.clone(),
            date: self.date,
            party_id,
            payment_term: self.payment_term.clone(),
            line_items: self
                .items
                .iter()
                .map(|item| LineItem {
                    id: None,
                    description: item.description.clone(),
                    rate: item.rate,
                    quantity: item.quantity,
                    unit: item.unit.clone(),
                    group_name: match item.group_name.trim() {
                        "" => None,
                        name => Some(name.to_string()),
                    },
                })
                .collect(),
        })
    }
}
