//! Fixed option catalogs and the lenient typed views over them.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const INDUSTRIES: &[&str] = &["Tech", "Finance", "Healthcare", "Retail"];

pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201+"];

pub const THEMES: &[&str] = &["light", "dark"];

pub const LAYOUTS: &[&str] = &["grid", "list"];

/// Returns the catalog spelling of `value` when it matches case-insensitively.
pub fn canonical_option(options: &[&'static str], value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    options
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
}

/// Colour scheme chosen on the preferences step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses stored text, falling back to the default for anything unknown.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arrangement of the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Layout::List,
            _ => Layout::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::List => "list",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_option_ignores_case_and_padding() {
        assert_eq!(canonical_option(INDUSTRIES, " tech "), Some("Tech"));
        assert_eq!(canonical_option(COMPANY_SIZES, "201+"), Some("201+"));
        assert_eq!(canonical_option(COMPANY_SIZES, "501+"), None);
    }

    #[test]
    fn typed_views_fall_back_to_defaults() {
        assert_eq!(Theme::from_value("DARK"), Theme::Dark);
        assert_eq!(Theme::from_value("solarized"), Theme::Light);
        assert_eq!(Layout::from_value("list"), Layout::List);
        assert_eq!(Layout::from_value(""), Layout::Grid);
    }
}
