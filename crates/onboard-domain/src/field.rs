use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one attribute of a [`crate::ProfileDraft`].
///
/// Ordering follows the wizard: personal fields first, then business, then
/// preferences. Error maps keyed by `Field` therefore list problems in the
/// order the user sees the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    CompanyName,
    Industry,
    Size,
    Theme,
    Layout,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::CompanyName,
        Field::Industry,
        Field::Size,
        Field::Theme,
        Field::Layout,
    ];

    /// Key used in the persisted JSON object.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::CompanyName => "companyName",
            Field::Industry => "industry",
            Field::Size => "size",
            Field::Theme => "theme",
            Field::Layout => "layout",
        }
    }

    /// Human-facing label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::CompanyName => "Company Name",
            Field::Industry => "Industry",
            Field::Size => "Company Size",
            Field::Theme => "Theme",
            Field::Layout => "Default Dashboard Layout",
        }
    }

    /// Resolves a field from its JSON key or a snake_case alias, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Field::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
    }

    /// Fixed option list for enumerated fields, `None` for free text.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Field::Industry => Some(crate::catalog::INDUSTRIES),
            Field::Size => Some(crate::catalog::COMPANY_SIZES),
            Field::Theme => Some(crate::catalog::THEMES),
            Field::Layout => Some(crate::catalog::LAYOUTS),
            Field::Name | Field::Email | Field::CompanyName => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_keys_and_aliases() {
        assert_eq!(Field::from_name("companyName"), Some(Field::CompanyName));
        assert_eq!(Field::from_name("company_name"), Some(Field::CompanyName));
        assert_eq!(Field::from_name(" EMAIL "), Some(Field::Email));
        assert_eq!(Field::from_name("size"), Some(Field::Size));
    }

    #[test]
    fn from_name_rejects_unknown_keys() {
        assert_eq!(Field::from_name("nmae"), None);
        assert_eq!(Field::from_name(""), None);
    }
}
