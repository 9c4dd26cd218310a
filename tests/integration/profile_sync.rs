use std::fs;

use crate::common::{stderr_of, Harness};

const SEEDED_CONFIG: &str = "\
[default]
region = us-west-2
output = json

[profile unrelated]
region = ap-southeast-2

[profile work]
credential_process = /previous/install/credential-provider --profile work
region = old-region
";

#[test]
fn rerun_with_an_unchanged_map_is_byte_identical() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");

    let first_run = harness.run();
    assert!(first_run.status.success(), "stderr: {}", stderr_of(&first_run));
    let first = fs::read_to_string(harness.aws_config_path()).expect("aws config exists");

    let second_run = harness.run();
    assert!(second_run.status.success(), "stderr: {}", stderr_of(&second_run));
    let second = fs::read_to_string(harness.aws_config_path()).expect("aws config exists");

    assert_eq!(first, second, "rerun must not change the file");
}

#[test]
fn unrelated_sections_survive_a_run_verbatim() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");
    fs::create_dir_all(harness.home.path().join(".aws")).expect("can create .aws");
    fs::write(harness.aws_config_path(), SEEDED_CONFIG).expect("can seed aws config");

    let output = harness.run();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let written = fs::read_to_string(harness.aws_config_path()).expect("aws config exists");
    assert!(written.contains("[default]\nregion = us-west-2\noutput = json"));
    assert!(written.contains("[profile unrelated]\nregion = ap-southeast-2"));
    assert!(
        !written.contains("old-region"),
        "stale section must be replaced: {written}"
    );
    assert_eq!(
        written.matches("[profile work]").count(),
        1,
        "exactly one section per profile: {written}"
    );
}

#[test]
fn pre_existing_config_is_snapshotted_to_a_bak_sibling() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");
    fs::create_dir_all(harness.home.path().join(".aws")).expect("can create .aws");
    fs::write(harness.aws_config_path(), SEEDED_CONFIG).expect("can seed aws config");

    let output = harness.run();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let bak = harness.home.path().join(".aws").join("config.bak");
    assert_eq!(
        fs::read_to_string(&bak).expect("bak sibling exists"),
        SEEDED_CONFIG,
        "bak must hold the pre-run content"
    );
}

#[test]
fn fresh_config_gets_no_bak_sibling() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");

    let output = harness.run();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(harness.aws_config_path().exists());
    assert!(!harness.home.path().join(".aws").join("config.bak").exists());
}

#[test]
fn rewritten_sections_land_after_untouched_ones() {
    let harness = Harness::new();
    harness.stage_profile_config_fixture("config_valid.json");
    fs::create_dir_all(harness.home.path().join(".aws")).expect("can create .aws");
    fs::write(harness.aws_config_path(), SEEDED_CONFIG).expect("can seed aws config");

    let output = harness.run();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let written = fs::read_to_string(harness.aws_config_path()).expect("aws config exists");
    let default_at = written.find("[default]").expect("default section");
    let unrelated_at = written.find("[profile unrelated]").expect("unrelated section");
    let personal_at = written.find("[profile personal]").expect("personal section");
    let work_at = written.find("[profile work]").expect("work section");
    assert!(
        default_at < unrelated_at && unrelated_at < personal_at && personal_at < work_at,
        "rewritten sections must move to the end in map order: {written}"
    );
}
