use std::io;

use onboard_config::ConfigError;
use onboard_core::CoreError;
use thiserror::Error;

use crate::cli::route::KNOWN_ROUTES;

/// Top-level error surfaced by the `onboard_cli` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown route `{route}`. Known routes: {}.{}", KNOWN_ROUTES.join(", "), route_hint(.suggestion))]
    UnknownRoute {
        route: String,
        suggestion: Option<String>,
    },
    #[error("{0}")]
    InvalidArguments(String),
}

fn route_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(best) => format!(" Did you mean `{best}`?"),
        None => String::new(),
    }
}
