use onboard_config::{ConfigKey, ConfigManager};

use crate::cli::output::{set_preferences, OutputPreferences};
use crate::cli::ui::{formatting::Formatter, style::refresh_style};
use crate::errors::CliError;
use crate::utils::paths::AppPaths;

pub const USAGE: &str = "config [show|--json|set <key> <value>]";

/// `config` subcommand: show or update the persisted settings.
pub fn run(paths: &AppPaths, args: &[String]) -> Result<(), CliError> {
    let manager = ConfigManager::with_base_dir(paths.home().to_path_buf())?;
    let mut config = manager.load()?;
    set_preferences(OutputPreferences::from_config(&config));
    refresh_style();
    let formatter = Formatter::new();

    let subcommand = args.first().map(|arg| arg.to_ascii_lowercase());
    match subcommand.as_deref() {
        None | Some("show") => {
            formatter.print_header("Configuration");
            let entries = config.entries();
            let rows: Vec<(&str, &str)> = entries
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect();
            formatter.print_two_column(&rows);
            formatter.print_info(format!("File: {}", manager.config_path().display()));
            Ok(())
        }
        Some("--json") => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Some("set") => {
            if args.len() < 3 {
                return Err(CliError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    key_names()
                )));
            }
            let key = ConfigKey::parse(&args[1]).ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "unknown config key `{}` (expected one of: {})",
                    args[1],
                    key_names()
                ))
            })?;
            let value = args[2..].join(" ");
            config.set(key, &value)?;
            manager.save(&config)?;
            tracing::info!(key = %key, "Configuration updated");
            formatter.print_success(format!("{} set to {}", key, config.get(key)));
            Ok(())
        }
        Some(other) => Err(CliError::InvalidArguments(format!(
            "unknown config command `{}` (usage: {})",
            other, USAGE
        ))),
    }
}

fn key_names() -> String {
    ConfigKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join("|")
}
