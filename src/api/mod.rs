mod types;

pub use types::{
    CompanyProfile, DriveStatus, Invoice, InvoicePayload, LineItem, NextNumber, Party,
    PartyPayload, UploadedFile,
};

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;

use crate::error::{InvoiceError, Result};

/// Typed client for the invoicing backend. Pure marshalling: every method
/// maps to exactly one endpoint and carries no business rules.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject non-2xx responses, extracting the server's JSON `detail`
    /// field when present, else the raw body.
    fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["detail"].as_str().map(str::to_string))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "no detail provided".to_string()
                } else {
                    trimmed.to_string()
                }
            });
        Err(InvoiceError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
        Ok(Self::check(resp)?.json()?)
    }

    pub fn list_parties(&self) -> Result<Vec<Party>> {
        log::debug!("GET /api/parties");
        Self::read_json(self.http.get(self.url("/api/parties")).send()?)
    }

    pub fn create_party(&self, party: &PartyPayload) -> Result<Party> {
        log::debug!("POST /api/parties ({})", party.company_name);
        Self::read_json(self.http.post(self.url("/api/parties")).json(party).send()?)
    }

    pub fn update_party(&self, id: i64, party: &PartyPayload) -> Result<Party> {
        log::debug!("PUT /api/parties/{id}");
        Self::read_json(
            self.http
                .put(self.url(&format!("/api/parties/{id}")))
                .json(party)
                .send()?,
        )
    }

    pub fn delete_party(&self, id: i64) -> Result<()> {
        log::debug!("DELETE /api/parties/{id}");
        Self::check(
            self.http
                .delete(self.url(&format!("/api/parties/{id}")))
                .send()?,
        )?;
        Ok(())
    }

    pub fn list_invoices(&self) -> Result<Vec<Invoice>> {
        log::debug!("GET /api/invoices");
        Self::read_json(self.http.get(self.url("/api/invoices")).send()?)
    }

    pub fn create_invoice(&self, invoice: &InvoicePayload) -> Result<Invoice> {
        log::debug!("POST /api/invoices ({})", invoice.invoice_number);
        Self::read_json(
            self.http
                .post(self.url("/api/invoices"))
                .json(invoice)
                .send()?,
        )
    }

    pub fn get_invoice(&self, id: i64) -> Result<Invoice> {
        log::debug!("GET /api/invoices/{id}");
        Self::read_json(self.http.get(self.url(&format!("/api/invoices/{id}"))).send()?)
    }

    pub fn delete_invoice(&self, id: i64) -> Result<()> {
        log::debug!("DELETE /api/invoices/{id}");
        Self::check(
            self.http
                .delete(self.url(&format!("/api/invoices/{id}")))
                .send()?,
        )?;
        Ok(())
    }

    /// Advisory next invoice number; a hint, never enforced.
    pub fn next_invoice_number(&self) -> Result<NextNumber> {
        log::debug!("GET /api/invoices/next-number");
        Self::read_json(self.http.get(self.url("/api/invoices/next-number")).send()?)
    }

    /// Attach one file to an invoice (multipart, single `file` field).
    pub fn upload_invoice_file(&self, invoice_id: i64, file: &Path) -> Result<UploadedFile> {
        log::debug!(
            "POST /api/invoices/{invoice_id}/files ({})",
            file.display()
        );
        let form = multipart::Form::new().file("file", file)?;
        Self::read_json(
            self.http
                .post(self.url(&format!("/api/invoices/{invoice_id}/files")))
                .multipart(form)
                .send()?,
        )
    }

    pub fn get_profile(&self) -> Result<CompanyProfile> {
        log::debug!("GET /api/config");
        Self::read_json(self.http.get(self.url("/api/config")).send()?)
    }

    /// Replace the singleton profile wholesale.
    pub fn update_profile(&self, profile: &CompanyProfile) -> Result<CompanyProfile> {
        log::debug!("PUT /api/config");
        Self::read_json(self.http.put(self.url("/api/config")).json(profile).send()?)
    }

    pub fn drive_status(&self) -> Result<DriveStatus> {
        log::debug!("GET /api/drive-status");
        Self::read_json(self.http.get(self.url("/api/drive-status")).send()?)
    }
}
