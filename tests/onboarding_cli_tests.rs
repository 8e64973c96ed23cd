
use assert_fs::prelude::*;
use cli_support::{CliTestHarness, DRAFT_FILE};
use predicates::prelude::*;
use regex::Regex;
use std::fs;

#[test]
fn scripted_onboarding_reaches_dashboard_with_entered_profile() {
    let harness = CliTestHarness::new();
    let output = harness.run_wizard(
        &[],
        &[
            "Ada Lovelace",
            "ada@example.com",
            "NEXT",
            "<BLANK>",
            "Tech",
            "11-50",
            "NEXT",
            "Analytics Engine",
            "<KEEP>",
            "<KEEP>",
            "NEXT",
            "dark",
            "list",
            "SUBMIT",
        ],
    );

    assert!(output.success, "wizard failed\n{}", output.stderr);
    let stdout = &output.stdout;
    assert!(stdout.contains("=== Step 1 of 3: Personal Info ==="), "{stdout}");
    assert!(stdout.contains("=== Step 2 of 3: Business Info ==="), "{stdout}");
    assert!(
        stdout.contains("[x] Personal Info  [x] Business Info  [>] Preferences"),
        "{stdout}"
    );
    assert!(stdout.contains("ERROR: Company name is required"), "{stdout}");
    assert!(stdout.contains("Submitting…"), "{stdout}");
    assert!(stdout.contains("OK: Profile submitted."), "{stdout}");
    assert!(stdout.contains("Theme: dark | Layout: list"), "{stdout}");

    for (label, value) in [
        ("Name", "Ada Lovelace"),
        ("Email", "ada@example.com"),
        ("Company", "Analytics Engine"),
        ("Industry", "Tech"),
        ("Company Size", "11-50"),
    ] {
        let row = Regex::new(&format!(r"(?m)^  {}\s+{}$", regex::escape(label), regex::escape(value)))
            .expect("valid row pattern");
        assert!(row.is_match(stdout), "missing `{label}` row\n{stdout}");
    }
    assert!(stdout.contains("  - Team Members: 42"), "{stdout}");
    assert!(
        !harness.draft_path().exists(),
        "draft is cleared after submission"
    );
}

#[test]
fn cancelled_run_keeps_draft_from_last_transition() {
    let harness = CliTestHarness::new();
    let output = harness.run_wizard(&["/onboarding"], &["Ada Lovelace", "ada@example.com", "NEXT", "CANCEL"]);
    assert!(output.success, "wizard failed\n{}", output.stderr);
    assert!(output.stdout.contains("WARNING: Onboarding paused."));

    let raw = fs::read_to_string(harness.draft_path()).expect("draft persisted");
    insta::assert_snapshot!(
        raw,
        @r#"{"name":"Ada Lovelace","email":"ada@example.com","companyName":"","industry":"","size":"","theme":"light","layout":"grid"}"#
    );

    let resumed = harness.run_wizard(
        &[],
        &[
            "<KEEP>",
            "<KEEP>",
            "NEXT",
            "Analytics Engine",
            "finance",
            "201+",
            "NEXT",
            "<KEEP>",
            "<KEEP>",
            "NEXT",
        ],
    );
    assert!(resumed.success, "resume failed\n{}", resumed.stderr);
    assert!(resumed.stdout.contains("Theme: light | Layout: grid"));
    assert!(Regex::new(r"(?m)^  Industry\s+Finance$")
        .expect("valid pattern")
        .is_match(&resumed.stdout));
    assert!(resumed
        .stdout
        .contains("[ Team Members: 42 ]  [ Active Projects: 8 ]  [ Notifications: 15 ]"));
}

#[test]
fn invalid_step_reports_errors_and_stays_put() {
    let harness = CliTestHarness::new();
    let output = harness.run_wizard(&[], &["<BLANK>", "ada-at-example", "NEXT", "<KEEP>", "CANCEL"]);

    assert!(output.success);
    assert!(output.stdout.contains("ERROR: Please fix 2 fields before continuing."));
    assert!(output.stdout.contains("  ERROR: Name is required"));
    assert!(output.stdout.contains("  ERROR: Email is invalid"));
    assert!(!output.stdout.contains("Step 2 of 3"));
    assert!(!harness.draft_path().exists(), "blocked navigation must not persist");
}

#[test]
fn corrupted_draft_is_discarded_silently() {
    let home = assert_fs::TempDir::new().expect("temp dir");
    home.child("storage").create_dir_all().expect("storage dir");
    let draft = home.child(DRAFT_FILE);
    draft.write_str("{ this is not json").expect("seed corrupt draft");

    let mut cmd = assert_cmd::Command::cargo_bin("onboard_cli").expect("binary exists");
    cmd.env("ONBOARD_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env("ONBOARD_TEST_INPUTS", "<KEEP>|<KEEP>|NEXT|CANCEL")
        .assert()
        .success()
        .stdout(predicate::str::contains("  ERROR: Name is required"))
        .stdout(predicate::str::contains("not json").not())
        .stderr(predicate::str::is_empty());

    draft.assert(predicate::path::missing());
}

#[test]
fn every_change_policy_saves_each_edit() {
    let harness = CliTestHarness::new();
    let set = harness.run(&["config", "set", "persist-policy", "every-change"]);
    assert!(set.success, "config set failed\n{}", set.stderr);

    let output = harness.run_wizard(&[], &["Grace Hopper", "CANCEL"]);
    assert!(output.success);

    let raw = fs::read_to_string(harness.draft_path()).expect("draft persisted on edit");
    assert!(raw.contains(r#""name":"Grace Hopper""#), "{raw}");
}

#[test]
fn back_on_first_step_is_refused() {
    let harness = CliTestHarness::new();
    let output = harness.run_wizard(&[], &["BACK", "<KEEP>", "CANCEL"]);

    assert!(output.success);
    assert!(output.stdout.contains("WARNING: Back is not available on step 1."));
}
