//! Smoke tests running the compiled binary.

use std::path::PathBuf;
use std::process::Command;

/// Helper to get the path to the compiled binary
fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hostblock"))
}

/// Run hostblock and return output
fn run_hostblock(args: &[&str]) -> std::process::Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute hostblock")
}

#[test]
fn test_version_command() {
    let output = run_hostblock(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_modes() {
    let output = run_hostblock(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for mode in ["update", "uninstall", "restore", "status"] {
        assert!(stdout.contains(mode), "missing {} in help", mode);
    }
}

#[test]
fn test_invalid_sentinel_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.yaml");
    let output = run_hostblock(&[
        "update",
        "--dry-run",
        "--sentinel",
        "not-an-address",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_dry_run_without_sources_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = dir.path().join("hosts");
    std::fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();
    let config = dir.path().join("hostblock.yaml");
    std::fs::write(
        &config,
        format!(
            "input_path: {0}\noutput_path: {0}\nblacklist_sources: {1}\nwhitelist_sources: {1}\n",
            hosts.display(),
            dir.path().join("none.sources").display()
        ),
    )
    .unwrap();

    let output = run_hostblock(&["update", "--dry-run", "-c", config.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("done, 0 websites blocked."));
    assert_eq!(
        std::fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1 localhost\n"
    );
}

#[test]
fn test_uninstall_without_block_fails() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = dir.path().join("hosts");
    std::fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();
    let config = dir.path().join("hostblock.yaml");
    std::fs::write(&config, format!("output_path: {}\n", hosts.display())).unwrap();

    let output = run_hostblock(&["uninstall", "-c", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No generated block"));
}

#[test]
fn test_sentinel_flag_replaces_invalid_config_value() {
    let dir = tempfile::tempdir().unwrap();
    let hosts = dir.path().join("hosts");
    std::fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();
    let config = dir.path().join("hostblock.yaml");
    std::fs::write(
        &config,
        format!(
            "sentinel_address: blackhole\ninput_path: {0}\noutput_path: {0}\nblacklist_sources: {1}\nwhitelist_sources: {1}\n",
            hosts.display(),
            dir.path().join("none.sources").display()
        ),
    )
    .unwrap();

    let without_flag = run_hostblock(&["update", "--dry-run", "-c", config.to_str().unwrap()]);
    assert!(!without_flag.status.success());

    let with_flag = run_hostblock(&[
        "update",
        "--dry-run",
        "--sentinel",
        "127.0.0.1",
        "-c",
        config.to_str().unwrap(),
    ]);
    assert!(with_flag.status.success());
    let stdout = String::from_utf8_lossy(&with_flag.stdout);
    assert!(stdout.contains("done, 1 websites blocked."));
}
