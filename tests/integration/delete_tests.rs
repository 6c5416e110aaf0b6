use crate::integration::test_helpers::{
    assert_cli_success, assert_output_contains, branches, commit_file, create_test_git_repo, git,
    run_bt,
};

#[test]
fn test_delete_merged_removes_only_merged_unprotected_branches() {
    let repo = create_test_git_repo();
    git(repo.path(), &["branch", "develop"]);
    git(repo.path(), &["branch", "feature/done"]);
    git(repo.path(), &["checkout", "-b", "feature/open"]);
    commit_file(repo.path(), "open.txt");
    git(repo.path(), &["checkout", "main"]);

    let output = run_bt(&repo, &["delete", "merged", "--yes"]);
    assert_cli_success(&output, "bt delete merged");
    assert_output_contains(&output, "All branches deleted", "delete merged");

    assert_eq!(branches(repo.path()), vec!["develop", "feature/open", "main"]);
}

#[test]
fn test_delete_merged_lists_candidates_before_asking() {
    let repo = create_test_git_repo();
    git(repo.path(), &["branch", "feature/done"]);
    git(repo.path(), &["branch", "bugfix/T-2_fixed"]);
    git(repo.path(), &["checkout", "-b", "feature/open"]);
    commit_file(repo.path(), "open.txt");
    git(repo.path(), &["checkout", "main"]);

    // No terminal, so the confirmation cannot be answered and nothing is deleted
    let output = run_bt(&repo, &["delete", "merged"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!stderr.contains("Could not list branches merged"), "{stderr}");
    assert!(stdout.contains("already merged into 'main'"), "{stdout}");
    assert!(stdout.contains("feature/done"), "{stdout}");
    assert!(stdout.contains("bugfix/T-2_fixed"), "{stdout}");
    assert!(!stdout.contains("feature/open"), "{stdout}");
    assert!(!stdout.contains("No branches to delete"), "{stdout}");

    assert_eq!(
        branches(repo.path()),
        vec!["bugfix/T-2_fixed", "feature/done", "feature/open", "main"]
    );
}

#[test]
fn test_delete_merged_from_a_stacked_branch() {
    let repo = create_test_git_repo();
    git(repo.path(), &["checkout", "-b", "feature/abc"]);
    commit_file(repo.path(), "abc.txt");
    git(repo.path(), &["checkout", "-b", "feature/abc-2"]);
    commit_file(repo.path(), "abc2.txt");

    let output = run_bt(&repo, &["delete", "merged", "--yes"]);
    assert_cli_success(&output, "bt delete merged");
    assert_output_contains(&output, "already merged into 'feature/abc-2'", "delete merged");

    // main stays protected even though it is merged
    assert_eq!(branches(repo.path()), vec!["feature/abc-2", "main"]);
}

#[test]
fn test_delete_merged_with_nothing_to_delete() {
    let repo = create_test_git_repo();

    let output = run_bt(&repo, &["delete", "merged"]);

    assert_cli_success(&output, "bt delete merged");
    assert_output_contains(&output, "No branches to delete", "delete merged");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Could not list branches merged"),
        "merged query should succeed: {stderr}"
    );
}

#[test]
fn test_delete_selected_with_only_current_branch() {
    let repo = create_test_git_repo();

    let output = run_bt(&repo, &["delete", "selected"]);

    assert_eq!(output.status.code(), Some(1));
    assert_output_contains(&output, "No branches to delete", "delete selected");
}

#[test]
fn test_delete_selected_rejects_current_branch() {
    let repo = create_test_git_repo();
    git(repo.path(), &["branch", "feature/x"]);

    let output = run_bt(&repo, &["delete", "selected", "main"]);

    assert_eq!(output.status.code(), Some(1));
    assert_output_contains(&output, "Cannot delete the current branch", "delete selected");
    assert_eq!(branches(repo.path()), vec!["feature/x", "main"]);
}
