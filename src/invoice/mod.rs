mod draft;
mod number;
mod submit;
mod suggest;

pub use draft::{parse_item_input, DraftItem, InvoiceDraft};
pub use number::fallback_invoice_number;
pub use submit::{resolve_link, submit_invoice, upload_batch, DriveLink, SubmitOutcome, UploadReport};
pub use suggest::{lookup, previous_month_label, suggestions_for, GroupSuggestions};
