use serde::{Deserialize, Serialize};

use crate::{Field, Layout, Theme};

/// The in-progress profile record collected by the wizard.
///
/// Every attribute is plain text: the store accepts whatever the user typed
/// and validation happens separately, per step. The serialized form is a
/// flat JSON object with exactly seven camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub industry: String,
    pub size: String,
    pub theme: String,
    pub layout: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company_name: String::new(),
            industry: String::new(),
            size: String::new(),
            theme: Theme::default().as_str().to_string(),
            layout: Layout::default().as_str().to_string(),
        }
    }
}

impl ProfileDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::CompanyName => &self.company_name,
            Field::Industry => &self.industry,
            Field::Size => &self.size,
            Field::Theme => &self.theme,
            Field::Layout => &self.layout,
        }
    }

    /// Returns a copy with one field replaced; all other fields are carried over.
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::CompanyName => self.company_name = value,
            Field::Industry => self.industry = value,
            Field::Size => self.size = value,
            Field::Theme => self.theme = value,
            Field::Layout => self.layout = value,
        }
        self
    }

    pub fn theme(&self) -> Theme {
        Theme::from_value(&self.theme)
    }

    pub fn layout(&self) -> Layout {
        Layout::from_value(&self.layout)
    }

    /// `(field, value)` pairs in wizard order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_uses_light_grid() {
        let draft = ProfileDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.theme, "light");
        assert_eq!(draft.layout, "grid");
    }

    #[test]
    fn with_field_replaces_only_one_value() {
        let base = ProfileDraft::default().with_field(Field::Name, "Ada");
        let updated = base.clone().with_field(Field::Email, "ada@example.com");

        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.email, "ada@example.com");
        assert_eq!(updated.theme, base.theme);
        assert!(base.email.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let draft = ProfileDraft::default().with_field(Field::CompanyName, "Acme");
        let value = serde_json::to_value(&draft).expect("serialize draft");
        let object = value.as_object().expect("json object");

        assert_eq!(object.len(), 7);
        assert_eq!(object["companyName"], "Acme");
        for field in Field::ALL {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
    }

    #[test]
    fn rejects_incomplete_objects() {
        let result = serde_json::from_str::<ProfileDraft>(r#"{"name":"Ada"}"#);
        assert!(result.is_err());
    }
}
