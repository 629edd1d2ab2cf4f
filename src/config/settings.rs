use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub options: OptionStrings,
}

impl Settings {
    /// Base URL of the backend, with INVOICE_API_URL taking precedence.
    pub fn base_url(&self) -> String {
        std::env::var("INVOICE_API_URL").unwrap_or_else(|_| self.server.base_url.clone())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DisplaySettings {
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
        }
    }
}

/// Raw delimited option strings as they appear in settings.toml. Parsing
/// into lists happens in [`crate::config::FormOptions`].
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OptionStrings {
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub rates: Option<String>,
    #[serde(default)]
    pub group_names: Option<String>,
    #[serde(default)]
    pub description_suggestions: Option<String>,
}
