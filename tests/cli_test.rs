//! End-to-end tests of the binary. No network access: every case either
//! fails before the request or never makes one.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with an isolated, empty config location.
fn vercelctl(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vercelctl").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("VERCELCTL_API_KEY")
        .env_remove("VERCELCTL_TEAM_ID")
        .env_remove("VERCELCTL_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn given_no_credentials_when_listing_then_not_configured_exit() {
    let home = TempDir::new().unwrap();

    vercelctl(&home)
        .args(["deployments", "list"])
        .assert()
        .failure()
        .code(78)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("API token not configured."))
        .stderr(predicate::str::contains("config set --token"))
        .stderr(predicate::str::contains("Request failed").not());
}

#[test]
fn given_invalid_state_when_listing_then_usage_error() {
    let home = TempDir::new().unwrap();

    vercelctl(&home)
        .args(["deployments", "list", "--state", "sleeping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn given_completion_request_when_running_then_script_printed() {
    let home = TempDir::new().unwrap();

    vercelctl(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vercelctl"));
}

#[test]
fn given_no_subcommand_when_running_then_help_and_usage_exit() {
    let home = TempDir::new().unwrap();

    vercelctl(&home)
        .assert()
        .failure()
        .code(64)
        .stdout(predicate::str::contains("deployments"));
}

#[cfg(target_os = "linux")]
#[test]
fn given_env_token_when_showing_config_then_masked() {
    let home = TempDir::new().unwrap();

    vercelctl(&home)
        .env("VERCELCTL_API_KEY", "abcdefghij0123456789XYZxyz")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcdefghij...XYZxyz"))
        .stdout(predicate::str::contains("0123456789").not())
        .stdout(predicate::str::contains("https://api.vercel.com"));
}

#[cfg(target_os = "linux")]
#[test]
fn given_config_set_when_running_then_written_under_xdg_config() {
    let home = TempDir::new().unwrap();

    vercelctl(&home)
        .args(["config", "set", "--team", "team_e2e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team ID set to: team_e2e"));

    let written = home.path().join(".config").join("vercelctl").join("config.toml");
    let content = std::fs::read_to_string(written).unwrap();
    assert!(content.contains("team_e2e"));
}

#[cfg(target_os = "linux")]
#[test]
fn given_broken_config_file_when_clearing_then_removed_and_success() {
    // Arrange
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("vercelctl");
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("config.toml");
    std::fs::write(&file, "api_key = [broken").unwrap();

    // Act / Assert
    vercelctl(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    vercelctl(&home).args(["config", "clear"]).assert().success();
    assert!(!file.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn given_broken_config_file_when_listing_then_config_exit_with_hint() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("vercelctl");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "api_key = [broken").unwrap();

    vercelctl(&home)
        .args(["deployments", "list"])
        .assert()
        .failure()
        .code(78)
        .stderr(predicate::str::contains("config clear"));
}
