use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Create a cached-logs root with one character directory holding `names`.
fn logs_root(character: &str, names: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.child(character);
    dir.create_dir_all().unwrap();
    for name in names {
        dir.child(name).write_str(&format!("payload:{name}")).unwrap();
    }
    temp
}

fn renum() -> Command {
    Command::cargo_bin("renum").unwrap()
}

#[test]
fn test_help() {
    renum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Collision-safe renumbering of cached character log files",
        ));
}

#[test]
fn test_version() {
    renum()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("renum"));
}

#[test]
fn test_missing_args() {
    renum()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments"));
}

#[test]
fn test_invalid_direction_rejected_before_any_work() {
    let temp = logs_root("hino", &["05_a.json"]);
    renum()
        .args(["hino", "5", "1", "sideways"])
        .args(["--root", temp.path().to_str().unwrap(), "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));

    temp.child("hino/05_a.json").assert(predicate::path::exists());
}

#[test]
fn test_zero_offset_rejected() {
    renum().args(["hino", "5", "0"]).assert().failure();
}

#[test]
fn test_unknown_character_lists_alternatives() {
    let temp = logs_root("kamiya", &["01_a.json"]);
    renum()
        .args(["hino", "5", "1"])
        .args(["--root", temp.path().to_str().unwrap(), "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Available characters"))
        .stderr(predicate::str::contains("kamiya"));
}

#[test]
fn test_dry_run_shows_plan_and_moves_nothing() {
    let temp = logs_root("hino", &["05_a.json", "06_b.json"]);
    renum()
        .args(["hino", "5", "2", "forward", "--dry-run"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("05_a.json"))
        .stdout(predicate::str::contains("07_a.json"))
        .stdout(predicate::str::contains("Dry run"));

    temp.child("hino/05_a.json").assert(predicate::path::exists());
    temp.child("hino/07_a.json").assert(predicate::path::missing());
}

#[test]
fn test_forward_shift_moves_files() {
    let temp = logs_root("hino", &["05_a.json", "06_b.json", "07_c.json"]);
    renum()
        .args(["hino", "5", "2", "forward", "--yes"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved  05_a.json -> 07_a.json"))
        .stdout(predicate::str::contains("Moved 3 of 3"));

    temp.child("hino/07_a.json").assert("payload:05_a.json");
    temp.child("hino/08_b.json").assert(predicate::path::exists());
    temp.child("hino/09_c.json").assert(predicate::path::exists());
    temp.child("hino/05_a.json").assert(predicate::path::missing());
}

#[test]
fn test_backward_shift() {
    let temp = logs_root("hino", &["10_a.json"]);
    renum()
        .args(["hino", "10", "3", "backward", "--yes"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success();

    temp.child("hino/07_a.json").assert(predicate::path::exists());
}

#[test]
fn test_backward_into_occupied_slot_is_skipped() {
    let temp = logs_root("hino", &["05_x.json", "10_x.json"]);
    renum()
        .args(["hino", "10", "5", "backward", "--yes"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip  10_x.json -> 05_x.json"))
        .stdout(predicate::str::contains("1 conflict(s)"));

    temp.child("hino/05_x.json").assert("payload:05_x.json");
    temp.child("hino/10_x.json").assert("payload:10_x.json");
}

#[test]
fn test_threshold_above_everything_is_informational() {
    let temp = logs_root("hino", &["01_a.json"]);
    renum()
        .args(["hino", "50", "2", "forward", "--yes"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));

    temp.child("hino/01_a.json").assert(predicate::path::exists());
}

#[test]
fn test_empty_character_dir() {
    let temp = logs_root("hino", &[]);
    renum()
        .args(["hino", "1", "1", "forward", "--yes"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No log files found"));
}

#[test]
fn test_pad_width_flag_widens_prefix() {
    let temp = logs_root("hino", &["005_a.json"]);
    renum()
        .args(["hino", "5", "2", "forward", "--yes", "--pad-width", "3"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved  005_a.json -> 007_a.json"));

    temp.child("hino/007_a.json").assert("payload:005_a.json");
    temp.child("hino/005_a.json").assert(predicate::path::missing());
}

#[test]
fn test_json_output() {
    let temp = logs_root("hino", &["05_a.json"]);
    let output = renum()
        .args(["hino", "5", "2", "forward", "--yes", "--output", "json"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["operation"], "shift");
    assert_eq!(value["summary"]["moved"], 1);
    assert_eq!(value["records"][0]["to"], "07_a.json");

    temp.child("hino/07_a.json").assert(predicate::path::exists());
}

#[test]
fn test_non_interactive_without_yes_fails() {
    let temp = logs_root("hino", &["05_a.json"]);
    renum()
        .args(["hino", "5", "2", "forward"])
        .args(["--root", temp.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("non-interactive"));

    // Nothing moved
    temp.child("hino/05_a.json").assert(predicate::path::exists());
}
