use std::env;
use std::process::Command;

const ENV_PREFIX: &str = "ONBOARD_BUILD";

fn main() {
    for watched in ["build.rs", ".git/HEAD", ".git/refs"] {
        println!("cargo:rerun-if-changed={watched}");
    }

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let metadata = [
        (
            "HASH",
            git(&["rev-parse", "--short", "HEAD"])
                .filter(|hash| !hash.is_empty())
                .unwrap_or_else(unknown),
        ),
        (
            "STATUS",
            git(&["status", "--porcelain"])
                .map(|changes| if changes.is_empty() { "clean" } else { "dirty" }.into())
                .unwrap_or_else(unknown),
        ),
        (
            "TIMESTAMP",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ),
        ("TARGET", env::var("TARGET").unwrap_or_else(|_| unknown())),
        ("PROFILE", env::var("PROFILE").unwrap_or_else(|_| unknown())),
        ("RUSTC", trimmed_stdout(&rustc, &["--version"]).unwrap_or_else(unknown)),
    ];

    for (name, value) in metadata {
        println!("cargo:rustc-env={ENV_PREFIX}_{name}={value}");
    }
}

fn unknown() -> String {
    "unknown".into()
}

/// Trimmed stdout of a successful command; empty output counts as success.
fn trimmed_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn git(args: &[&str]) -> Option<String> {
    trimmed_stdout("git", args)
}
