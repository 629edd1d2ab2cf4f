use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Settings directory not found at {0}. Run 'invoice-cli init' to create it.")]
    SettingsNotFound(PathBuf),

    #[error("Settings file not found: {0}")]
    SettingsFileNotFound(PathBuf),

    #[error("Failed to parse settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Settings directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("No client selected. Pass --party <id|name>, or add one with 'invoice-cli add-party'.")]
    NoPartySelected,

    #[error("Client '{0}' not found on the server")]
    PartyNotFound(String),

    #[error("No line items specified. Use --item <desc>:<rate>:<qty>:<unit>[:<group>] to add them.")]
    NoItems,

    #[error("Invalid line item '{0}'. Expected 'desc:rate:qty:unit[:group]' (e.g., 'Consulting:650:3:days')")]
    InvalidItemFormat(String),

    #[error("Invalid rate '{rate}' for item '{item}': {reason}")]
    InvalidRate {
        item: String,
        rate: String,
        reason: String,
    },

    #[error("Invalid quantity '{qty}' for item '{item}': {reason}")]
    InvalidQuantity {
        item: String,
        qty: String,
        reason: String,
    },

    #[error("Line item {index}: {reason}")]
    InvalidLineItem { index: usize, reason: String },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Attachment not found: {0}")]
    AttachmentNotFound(PathBuf),

    #[error("Server returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deletion requires confirmation. Re-run with --yes to confirm non-interactively.")]
    NotConfirmed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
