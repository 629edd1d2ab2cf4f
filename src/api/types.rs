use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A billable client record.
#[derive(Debug, Clone, Deserialize)]
pub struct Party {
    pub id: i64,
    pub company_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub payment_term: Option<String>,
}

/// Create/replace payload for a party.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartyPayload {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<String>,
}

impl Party {
    pub fn payload(&self) -> PartyPayload {
        PartyPayload {
            company_name: self.company_name.clone(),
            contact_person: self.contact_person.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            vat_number: self.vat_number.clone(),
            payment_term: self.payment_term.clone(),
        }
    }
}

/// One billable row on an invoice. The amount is always rate × quantity,
/// derived on read and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: String,
    pub rate: f64,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl LineItem {
    pub fn amount(&self) -> f64 {
        self.rate * self.quantity
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub party_id: i64,
    #[serde(default)]
    pub payment_term: String,
    #[serde(default)]
    pub drive_file_id: Option<String>,
    #[serde(default)]
    pub drive_file_url: Option<String>,
    #[serde(default)]
    pub drive_folder_id: Option<String>,
    pub party: Party,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    pub fn total(&self) -> f64 {
        self.line_items.iter().map(LineItem::amount).sum()
    }

    /// Browsable URL of the invoice's folder in external storage, if the
    /// backend has created one.
    pub fn folder_url(&self) -> Option<String> {
        self.drive_folder_id
            .as_ref()
            .map(|id| format!("https://drive.google.com/drive/folders/{id}"))
    }
}

/// Create payload for an invoice.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePayload {
    pub invoice_number: String,
    pub date: NaiveDate,
    pub party_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<String>,
    pub line_items: Vec<LineItem>,
}

/// The singleton company profile used to populate generated documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub brand_name: String,
    pub legal_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    pub vat_note: String,
}

#[derive(Debug, Deserialize)]
pub struct NextNumber {
    pub invoice_number: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadedFile {
    pub message: String,
    pub file_id: String,
    pub file_url: String,
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveStatus {
    pub status: String,
    pub message: String,
}
