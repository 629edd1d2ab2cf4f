use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// What the suggestion map says about a group name. A group that is
/// present but maps to an empty list gets a generated previous-month
/// suggestion; an unknown group gets nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSuggestions<'a> {
    /// The group maps to a non-empty list; used verbatim.
    Listed(&'a [String]),
    /// The group is a key in the map with an empty list.
    PreviousMonth,
    /// The group is not in the map.
    NoSuggestion,
}

pub fn lookup<'a>(
    suggestions: &'a HashMap<String, Vec<String>>,
    group_name: &str,
) -> GroupSuggestions<'a> {
    match suggestions.get(group_name) {
        Some(list) if !list.is_empty() => GroupSuggestions::Listed(list),
        Some(_) => GroupSuggestions::PreviousMonth,
        None => GroupSuggestions::NoSuggestion,
    }
}

/// Label of the calendar month before the given date, e.g. "May 2024" for
/// any June 2024 date. January wraps to December of the prior year.
pub fn previous_month_label(today: NaiveDate) -> String {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    format!("{} {}", MONTH_NAMES[(month - 1) as usize], year)
}

/// Resolve the suggestions offered for a group name on the given date.
pub fn suggestions_for(
    suggestions: &HashMap<String, Vec<String>>,
    group_name: &str,
    today: NaiveDate,
) -> Vec<String> {
    match lookup(suggestions, group_name) {
        GroupSuggestions::Listed(list) => list.to_vec(),
        GroupSuggestions::PreviousMonth => vec![previous_month_label(today)],
        GroupSuggestions::NoSuggestion => Vec::new(),
    }
}
