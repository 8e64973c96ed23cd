use std::env;

use onboard_config::{Config, ConfigManager};
use onboard_core::{DashboardSnapshot, LocalDraftCache, NavigationController, WizardSettings};
use onboard_domain::ProfileDraft;
use onboard_storage_json::JsonFileStore;
use tracing::info;

use crate::cli::commands;
use crate::cli::dashboard::DashboardRenderer;
use crate::cli::output::{set_preferences, OutputPreferences};
use crate::cli::route::{Route, KNOWN_ROUTES};
use crate::cli::ui::style::refresh_style;
use crate::cli::wizard::{TerminalInteraction, WizardOutcome, WizardView};
use crate::errors::CliError;
use crate::utils::{build_info, paths::AppPaths};

pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> Result<(), CliError> {
    let paths = AppPaths::resolve();
    match args.first().map(String::as_str) {
        None => launch(&paths, Route::Onboarding),
        Some("--version") | Some("-V") => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("config") => commands::config::run(&paths, &args[1..]),
        Some(raw) => {
            if args.len() > 1 {
                return Err(CliError::InvalidArguments(format!(
                    "unexpected arguments after route `{}`: {}",
                    raw,
                    args[1..].join(" ")
                )));
            }
            launch(&paths, Route::parse(raw)?)
        }
    }
}

fn launch(paths: &AppPaths, route: Route) -> Result<(), CliError> {
    let config = ConfigManager::with_base_dir(paths.home().to_path_buf())?.load()?;
    set_preferences(OutputPreferences::from_config(&config));
    refresh_style();
    info!(route = %route, home = %paths.home().display(), "Launching route");

    match route {
        Route::Onboarding => match run_onboarding(paths, &config)? {
            WizardOutcome::Submitted(profile) => show_dashboard(Some(&profile)),
            WizardOutcome::Cancelled => Ok(()),
        },
        Route::Dashboard => show_dashboard(None),
    }
}

fn run_onboarding(paths: &AppPaths, config: &Config) -> Result<WizardOutcome, CliError> {
    let store = JsonFileStore::new(paths.storage_dir())?;
    let cache = LocalDraftCache::new(store, config.storage_key.clone());
    let settings = WizardSettings {
        persist_policy: config.persist_policy,
        submit_delay: config.submit_delay(),
    };
    let mut nav = NavigationController::mount(cache, settings);
    let mut interaction = TerminalInteraction::new();
    WizardView::new(&mut interaction).run(&mut nav)
}

/// In-memory hand-off: the profile is never re-read from storage.
fn show_dashboard(profile: Option<&ProfileDraft>) -> Result<(), CliError> {
    let snapshot = DashboardSnapshot::from_profile(profile);
    DashboardRenderer::new().print(&snapshot);
    Ok(())
}

fn print_usage() {
    println!("Usage: onboard_cli [ROUTE]");
    println!("       onboard_cli {}", commands::config::USAGE);
    println!("       onboard_cli --version");
    println!();
    println!("Routes: {}", KNOWN_ROUTES.join(", "));
}
