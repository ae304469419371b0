use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn bureaulog(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bureaulog").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("BUREAULOG_CONFIG", temp_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();

    bureaulog(&temp_dir)
        .arg("does-not-exist.log")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Stream error reading does-not-exist.log"));
}

#[test]
fn test_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();

    bureaulog(&temp_dir)
        .args(["--config", "nowhere.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "summary = \"yes\"\n").unwrap();

    bureaulog(&temp_dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_empty_input_prints_full_tally() {
    let temp_dir = TempDir::new().unwrap();

    bureaulog(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            "Path Aborted completed 0 times\n\
             Path Pending-normal completed 0 times\n\
             Path Pending-stillborn completed 0 times\n\
             Path Normal completed 0 times\n\
             Path Stillborn completed 0 times\n",
        );
}

#[test]
fn test_unknown_format_rejected() {
    let temp_dir = TempDir::new().unwrap();

    bureaulog(&temp_dir)
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}
