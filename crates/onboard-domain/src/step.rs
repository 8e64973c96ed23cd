use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Field;

/// One of the three ordered wizard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    Personal,
    Business,
    Preferences,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Personal, Step::Business, Step::Preferences];
    pub const COUNT: usize = 3;

    /// 1-based position of the step.
    pub fn number(self) -> usize {
        match self {
            Step::Personal => 1,
            Step::Business => 2,
            Step::Preferences => 3,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        Step::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Business => "Business Info",
            Step::Preferences => "Preferences",
        }
    }

    /// Inputs rendered on this step, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Personal => &[Field::Name, Field::Email],
            Step::Business => &[Field::CompanyName, Field::Industry, Field::Size],
            Step::Preferences => &[Field::Theme, Field::Layout],
        }
    }

    pub fn next(self) -> Option<Self> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Step::from_number(self.number() - 1)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} ({})", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_linear() {
        assert_eq!(Step::Personal.next(), Some(Step::Business));
        assert_eq!(Step::Business.next(), Some(Step::Preferences));
        assert_eq!(Step::Preferences.next(), None);
        assert_eq!(Step::Personal.previous(), None);
        assert_eq!(Step::Preferences.previous(), Some(Step::Business));
        assert!(Step::Preferences.is_last());
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for field in Field::ALL {
            let owners = Step::ALL
                .iter()
                .filter(|step| step.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field} should appear on one step");
        }
    }
}
