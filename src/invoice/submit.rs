use std::path::PathBuf;

use crate::api::{ApiClient, Invoice};
use crate::error::{InvoiceError, Result};

use super::draft::InvoiceDraft;

/// Where the generated document can be reached, in preference order:
/// the invoice's storage folder when attachments were staged and a folder
/// exists, else the direct file URL, else nowhere yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveLink {
    Folder(String),
    File(String),
    NotUploaded,
}

/// What happened to the staged attachments of one submit.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub uploaded: Vec<PathBuf>,
    pub failed: Option<(PathBuf, String)>,
    pub skipped: Vec<PathBuf>,
}

impl UploadReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_none()
    }

    pub fn attempted(&self) -> usize {
        self.uploaded.len() + usize::from(self.failed.is_some()) + self.skipped.len()
    }
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub invoice: Invoice,
    pub uploads: UploadReport,
    pub link: DriveLink,
}

/// Submit a draft: validate, create the invoice, push the staged
/// attachments, and resolve the storage link.
///
/// Upload policy is abort-on-first-error: the first failed upload is
/// logged, the rest of the batch is skipped, and the created invoice
/// stands. Only a fully successful batch triggers the re-fetch that picks
/// up storage links populated by the uploads.
pub fn submit_invoice(api: &ApiClient, draft: &InvoiceDraft) -> Result<SubmitOutcome> {
    let payload = draft.payload()?;
    for file in &draft.attachments {
        if !file.exists() {
            return Err(InvoiceError::AttachmentNotFound(file.clone()));
        }
    }

    let mut invoice = api.create_invoice(&payload)?;
    log::info!("created invoice {} (id {})", invoice.invoice_number, invoice.id);

    let uploads = upload_batch(api, invoice.id, &draft.attachments);
    if !draft.attachments.is_empty() && uploads.all_succeeded() {
        match api.get_invoice(invoice.id) {
            Ok(latest) => invoice = latest,
            Err(e) => log::warn!("could not refresh invoice {}: {e}", invoice.id),
        }
    }

    let link = resolve_link(&invoice, !draft.attachments.is_empty());
    Ok(SubmitOutcome {
        invoice,
        uploads,
        link,
    })
}

/// Upload files to an invoice one at a time, stopping at the first
/// failure. The failure and every skipped file are logged; nothing is
/// retried and the invoice itself is left alone.
pub fn upload_batch(api: &ApiClient, invoice_id: i64, files: &[PathBuf]) -> UploadReport {
    let mut report = UploadReport::default();
    let mut remaining = files.iter();
    while let Some(file) = remaining.next() {
        match api.upload_invoice_file(invoice_id, file) {
            Ok(uploaded) => {
                log::debug!("uploaded {} as {}", file.display(), uploaded.filename);
                report.uploaded.push(file.clone());
            }
            Err(e) => {
                log::warn!("upload of {} failed: {e}", file.display());
                report.failed = Some((file.clone(), e.to_string()));
                report.skipped = remaining.cloned().collect();
                for skipped in &report.skipped {
                    log::warn!("skipped {}", skipped.display());
                }
                break;
            }
        }
    }
    report
}

pub fn resolve_link(invoice: &Invoice, had_attachments: bool) -> DriveLink {
    if had_attachments {
        if let Some(url) = invoice.folder_url() {
            return DriveLink::Folder(url);
        }
    }
    match &invoice.drive_file_url {
        Some(url) => DriveLink::File(url.clone()),
        None => DriveLink::NotUploaded,
    }
}
