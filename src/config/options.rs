use std::collections::HashMap;

use super::settings::OptionStrings;

/// Parse a comma-separated option list: trimmed, empty entries dropped,
/// order preserved. Absent input yields an empty list, never an error.
pub fn parse_list(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse "Group:opt1,opt2;OtherGroup:opt1" into a map of group name to its
/// ordered suggestion list. Entries without a colon are silently skipped.
/// A group followed by an empty list (e.g. "Misc:") stays in the map with
/// an empty value; downstream that emptiness is meaningful (see
/// [`crate::invoice::GroupSuggestions`]).
pub fn parse_description_suggestions(value: Option<&str>) -> HashMap<String, Vec<String>> {
    let mut out = HashMap::new();
    let Some(value) = value else {
        return out;
    };
    for group in value.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let Some(colon) = group.find(':') else {
            continue;
        };
        let group_name = group[..colon].trim().to_string();
        let list = parse_list(Some(&group[colon + 1..]));
        out.insert(group_name, list);
    }
    out
}

/// Invoice-authoring options: unit/rate/group pick lists plus per-group
/// description suggestions.
#[derive(Debug, Default)]
pub struct FormOptions {
    pub units: Vec<String>,
    pub rates: Vec<String>,
    pub group_names: Vec<String>,
    pub suggestions: HashMap<String, Vec<String>>,
}

impl FormOptions {
    /// Resolve from the environment, falling back to the delimited strings
    /// stored in settings.toml. Both sources use the same format.
    pub fn resolve(stored: &OptionStrings) -> Self {
        let units = env_or("INVOICE_UNITS", stored.units.as_deref());
        let rates = env_or("INVOICE_RATES", stored.rates.as_deref());
        let group_names = env_or("INVOICE_GROUP_NAMES", stored.group_names.as_deref());
        let suggestions = env_or(
            "INVOICE_SUGGESTIONS",
            stored.description_suggestions.as_deref(),
        );
        Self {
            units: parse_list(units.as_deref()),
            rates: parse_list(rates.as_deref()),
            group_names: parse_list(group_names.as_deref()),
            suggestions: parse_description_suggestions(suggestions.as_deref()),
        }
    }
}

fn env_or(name: &str, stored: Option<&str>) -> Option<String> {
    std::env::var(name).ok().or_else(|| stored.map(str::to_string))
}
