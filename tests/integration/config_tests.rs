use crate::integration::test_helpers::{
    assert_cli_success, assert_output_contains, create_test_git_repo, git, run_bt,
};

#[test]
fn test_repository_settings_change_protected_branches() {
    let repo = create_test_git_repo();
    git(repo.path(), &["branch", "develop"]);
    std::fs::write(
        repo.path().join(".branch-tool.json"),
        r#"{"delete": {"protected_branches": ["main"]}}"#,
    )
    .unwrap();

    let output = run_bt(&repo, &["delete", "merged", "--yes"]);

    assert_cli_success(&output, "bt delete merged");
    assert_output_contains(&output, "Deleting branch 'develop'", "unprotected develop");
}

#[test]
fn test_explicit_config_must_exist() {
    let repo = create_test_git_repo();

    let output = run_bt(&repo, &["list", "--config", "does-not-exist.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert_output_contains(&output, "Configuration error", "missing --config file");
}

#[test]
fn test_config_get_reports_effective_value() {
    let repo = create_test_git_repo();

    let output = run_bt(&repo, &["config", "get", "git.binary"]);

    assert_cli_success(&output, "bt config get");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "git");
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_set_writes_user_file() {
    let repo = create_test_git_repo();

    let output = run_bt(&repo, &["config", "set", "list.show_current_header", "false"]);
    assert_cli_success(&output, "bt config set");

    let saved = std::fs::read_to_string(repo.user_config_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["list"]["show_current_header"], false);

    let output = run_bt(&repo, &["config", "get", "list.show_current_header"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}
