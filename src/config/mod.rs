mod options;
mod settings;

pub use options::{parse_description_suggestions, parse_list, FormOptions};
pub use settings::{DisplaySettings, OptionStrings, ServerSettings, Settings};

use crate::error::{InvoiceError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the settings directory path (~/.invoice-cli or XDG config)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "invoice-cli") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = dirs_home().ok_or_else(|| {
        InvoiceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".invoice-cli"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load settings.toml
pub fn load_settings(config_dir: &Path) -> Result<Settings> {
    let path = config_dir.join("settings.toml");
    if !path.exists() {
        return Err(InvoiceError::SettingsFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| InvoiceError::SettingsParse { path, source: e })
}

/// Template content for settings.toml
pub const SETTINGS_TEMPLATE: &str = r#"[server]
base_url = "http://localhost:8000"
timeout_secs = 30

[display]
currency_symbol = "€"

# Pick lists offered when authoring an invoice. Each value is a single
# delimited string: comma-separated entries, and for description
# suggestions, semicolon-separated "Group:opt1,opt2" pairs. A group with
# nothing after the colon gets a generated "previous month" suggestion.
#
# The INVOICE_UNITS, INVOICE_RATES, INVOICE_GROUP_NAMES and
# INVOICE_SUGGESTIONS environment variables override these.
[options]
units = "days,hours,flat"
rates = "450,650,800"
group_names = "AI Engineering Services,Expenses"
description_suggestions = "AI Engineering Services:;Expenses:Travel,Accommodation"
"#;
