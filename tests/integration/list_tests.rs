use crate::integration::test_helpers::{
    assert_cli_success, assert_output_contains, create_test_git_repo, git, run_bt,
};
use serde_json::{json, Value};

#[test]
fn test_list_json_nests_stacks_by_type_and_ticket() {
    let repo = create_test_git_repo();
    for branch in ["feature/abc_x-2", "feature/abc_x-3", "bugfix/def_y"] {
        git(repo.path(), &["branch", branch]);
    }
    git(repo.path(), &["checkout", "feature/abc_x-3"]);

    let output = run_bt(&repo, &["list", "--json"]);
    assert_cli_success(&output, "bt list --json");

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["current"], "feature/abc_x-3");
    assert_eq!(
        report["tree"],
        json!({
            "bugfix": { "def_y": "bugfix/def_y" },
            "feature": { "abc_x": ["feature/abc_x-2", "feature/abc_x-3"] },
            "other": { "main": "main" }
        })
    );
}

#[test]
fn test_list_renders_tree_and_marks_current() {
    let repo = create_test_git_repo();
    git(repo.path(), &["branch", "feature/T-1/login"]);
    git(repo.path(), &["branch", "feature/T-1/login-2"]);

    let output = run_bt(&repo, &["list"]);
    assert_cli_success(&output, "bt list");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All local branches"));
    assert!(stdout.contains("└── main [current]"));
    assert!(stdout.contains("feature/T-1/login-2"));
    assert!(!stdout.contains('\u{1b}'), "--no-color output must be plain");
}

#[test]
fn test_list_fails_on_detached_head() {
    let repo = create_test_git_repo();
    git(repo.path(), &["checkout", "--detach"]);

    let output = run_bt(&repo, &["list"]);

    assert_eq!(output.status.code(), Some(1));
    assert_output_contains(&output, "current branch", "detached HEAD");
}
