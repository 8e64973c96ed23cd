use std::fmt;

use strsim::levenshtein;

use crate::errors::CliError;

pub const KNOWN_ROUTES: [&str; 3] = ["/", "/onboarding", "/dashboard"];

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    Dashboard,
}

impl Route {
    pub fn parse(raw: &str) -> Result<Self, CliError> {
        let path = normalize(raw);
        match path.as_str() {
            "/" | "/onboarding" => Ok(Route::Onboarding),
            "/dashboard" => Ok(Route::Dashboard),
            _ => Err(CliError::UnknownRoute {
                suggestion: suggest(&path).map(str::to_string),
                route: raw.to_string(),
            }),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Onboarding => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn normalize(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_ascii_lowercase();
    if trimmed.starts_with('/') {
        trimmed
    } else {
        format!("/{trimmed}")
    }
}

fn suggest(path: &str) -> Option<&'static str> {
    KNOWN_ROUTES
        .iter()
        .map(|known| (levenshtein(known, path), *known))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known)
}
