use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// When the in-progress draft is mirrored to local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistPolicy {
    /// Save after every accepted forward/backward transition.
    #[default]
    OnTransition,
    /// Additionally save after every field edit.
    EveryChange,
}

impl PersistPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "on-transition" | "transition" => Some(PersistPolicy::OnTransition),
            "every-change" | "change" | "eager" => Some(PersistPolicy::EveryChange),
            _ => None,
        }
    }

    pub fn saves_on_edit(self) -> bool {
        matches!(self, PersistPolicy::EveryChange)
    }
}

impl fmt::Display for PersistPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersistPolicy::OnTransition => "on-transition",
            PersistPolicy::EveryChange => "every-change",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for PersistPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .and_then(PersistPolicy::parse)
            .unwrap_or_default())
    }
}
