use std::fs;

use crate::common::{stderr_of, stdout_of, Harness};

#[test]
fn fresh_settings_file_has_all_placeholders_resolved() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");
    harness.stage_settings_template_fixture();

    let output = harness.run();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let settings = fs::read_to_string(harness.settings_path()).expect("settings file exists");
    assert!(
        !settings.contains("__OTEL_HELPER_PATH__"),
        "settings: {settings}"
    );
    assert!(
        !settings.contains("__CREDENTIAL_PROCESS_PATH__"),
        "settings: {settings}"
    );
    assert!(settings.contains(&harness.credential_process_path().display().to_string()));

    let parsed: serde_json::Value =
        serde_json::from_str(&settings).expect("rendered settings must stay valid JSON");
    assert!(parsed.get("env").is_some());
}

#[test]
fn existing_settings_file_is_backed_up_with_a_timestamp() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");
    harness.stage_settings_template_fixture();
    fs::create_dir_all(harness.home.path().join(".claude")).expect("can create .claude");
    fs::write(harness.settings_path(), "{\"user\": \"edits\"}").expect("can seed settings");

    let output = harness.run();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(
        stdout_of(&output).contains("Backed up existing settings to:"),
        "stdout: {}",
        stdout_of(&output)
    );

    let backups: Vec<_> = fs::read_dir(harness.home.path().join(".claude"))
        .expect("can list .claude")
        .map(|entry| entry.expect("can read entry").file_name().into_string().expect("utf-8 name"))
        .filter(|name| name.starts_with("settings.json.backup."))
        .collect();
    assert_eq!(backups.len(), 1, "exactly one backup: {backups:?}");

    let stamp = backups[0]
        .strip_prefix("settings.json.backup.")
        .expect("prefix checked above");
    assert!(is_second_resolution_stamp(stamp), "stamp: {stamp}");

    let backup_content =
        fs::read_to_string(harness.home.path().join(".claude").join(&backups[0]))
            .expect("can read backup");
    assert_eq!(backup_content, "{\"user\": \"edits\"}");
}

/// `YYYYMMDD_HHMMSS`: fourteen digits split by one underscore.
fn is_second_resolution_stamp(stamp: &str) -> bool {
    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit)
}
