use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vectorpad_cmd() -> Command {
    Command::cargo_bin("vectorpad").expect("binary exists")
}

const SQUARE_AND_POLYGON: &str = "\
# rectangle, then a pentagon
tool rect
key-down shift
click 100 100
click 200 200
key-up shift

tool polygon
sides 5
key-down shift
click 400 300
click 450 300
key-up shift
";

#[test]
fn vectorpad_help_prints_usage() {
    vectorpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vector drawing"));
}

#[test]
fn no_script_prints_controls() {
    vectorpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--script"));
}

#[test]
fn replay_writes_png_and_summary() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.txt");
    let output = temp.path().join("out.png");
    std::fs::write(&script, SQUARE_AND_POLYGON).unwrap();

    vectorpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--width", "640", "--height", "480", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shapes: 1"))
        .stdout(predicate::str::contains("polygons: 1"))
        .stdout(predicate::str::contains("[Tool: Polygon]"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn malformed_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    std::fs::write(&script, "tool line\nclick ten 20\n").unwrap();

    vectorpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    vectorpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(temp.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn explicit_config_changes_draw_mode_key() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let script = temp.path().join("events.txt");
    std::fs::write(&config, "[drawing]\ndraw_mode_key = \"space\"\n").unwrap();
    // Shift no longer enters draw mode, Space does.
    std::fs::write(
        &script,
        "key-down shift\nclick 100 100\nclick 200 200\nkey-up shift\n\
         key-down space\nclick 100 100\nclick 200 200\nkey-up space\n",
    )
    .unwrap();

    vectorpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("shapes: 1"));
}

#[test]
fn duplicate_keybindings_are_rejected() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let script = temp.path().join("events.txt");
    std::fs::write(&config, "[keybindings]\nselect_line = [\"G\"]\n").unwrap();
    std::fs::write(&script, "tool line\n").unwrap();

    vectorpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate keybinding"));
}

#[test]
fn dump_config_schema_prints_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("draw_mode_key"));
}
