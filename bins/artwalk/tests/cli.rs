use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn artwalk() -> Command {
    let mut cmd = Command::cargo_bin("artwalk").unwrap();
    // Keep the run independent of any config file in the working directory
    cmd.env("ARTWALK_CONFIG", "/dev/null");
    cmd.env_remove("ARTWALK_CATALOG");
    cmd
}

fn track(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn lists_builtin_tours() {
    artwalk()
        .arg("tours")
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown Mural Mile"))
        .stdout(predicate::str::contains("mural-mile"));
}

#[test]
fn walk_prints_triggers_in_order() {
    let file = track("37.7749,-122.4194\n37.7749,-122.4194\n37.7755,-122.4180\n37.7800,-122.4300\n");

    artwalk()
        .args(["walk", "mural-mile"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("★ The Phoenix's Ascent (Jane Artist, 2022)"))
        .stdout(predicate::str::contains("● Echoes of the Bay (John Smith, 2019)"))
        .stdout(predicate::str::contains("left art2"));
}

#[test]
fn walk_json_emits_one_line_per_event() {
    let file = track("37.7749,-122.4194\n37.7749,-122.4194\n");

    let output = artwalk()
        .args(["walk", "mural-mile", "--json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let types: Vec<String> = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["type"].to_string())
        .collect();
    assert_eq!(types, vec!["\"tour_selected\"", "\"artwork_triggered\""]);
}

#[test]
fn walk_skips_malformed_fixes() {
    let file = track("200.0,0.0\n37.7749,-122.4194\n");

    artwalk()
        .args(["walk", "mural-mile", "--stats"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("fix 1 skipped"))
        .stdout(predicate::str::contains("1 position update (1 rejected)"));
}

#[test]
fn unknown_tour_exits_with_input_error() {
    let file = track("37.7749,-122.4194\n");

    artwalk()
        .args(["walk", "no-such-tour"])
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid tour 'no-such-tour'"));
}

#[test]
fn distance_between_points() {
    artwalk()
        .args(["distance", "37.7749", "-122.4194", "37.7749", "-122.4194"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 m"));
}

#[test]
fn layout_places_pins_in_display_range() {
    let output = artwalk()
        .args(["layout", "mural-mile", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pins = value["pins"].as_array().unwrap();
    assert_eq!(pins.len(), 3);
    assert_eq!(pins[0]["left"], 10.0);
    assert_eq!(pins[2]["left"], 90.0);
}
