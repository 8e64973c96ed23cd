pub mod commands;
pub mod dashboard;
pub mod output;
pub mod route;
pub mod shell;
pub mod ui;
pub mod wizard;

pub use shell::{run_cli, run_with_args};
