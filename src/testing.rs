//! In-memory collaborators for exercising the tasks without git or a terminal.

use crate::cli::prompt::Prompter;
use crate::errors::{BranchToolError, Result};
use crate::git::GitClient;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Git double holding branches in memory and recording mutating calls
#[derive(Debug, Default)]
pub struct FakeGit {
    pub current: Option<String>,
    pub branches: RefCell<Vec<String>>,
    pub merged: Option<Vec<String>>,
    /// Branches whose safe delete fails as if they held unmerged commits
    pub unmerged: Vec<String>,
    /// Branches whose forced delete fails too
    pub undeletable: Vec<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeGit {
    pub fn new(current: &str, branches: &[&str]) -> Self {
        Self {
            current: Some(current.to_string()),
            branches: RefCell::new(branches.iter().map(|b| b.to_string()).collect()),
            merged: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn detached(branches: &[&str]) -> Self {
        Self {
            current: None,
            ..Self::new("", branches)
        }
    }

    pub fn with_merged(mut self, merged: &[&str]) -> Self {
        self.merged = Some(merged.iter().map(|b| b.to_string()).collect());
        self
    }

    pub fn with_failing_merged_query(mut self) -> Self {
        self.merged = None;
        self
    }

    pub fn with_unmerged(mut self, branches: &[&str]) -> Self {
        self.unmerged = branches.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_undeletable(mut self, branches: &[&str]) -> Self {
        self.undeletable = branches.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn branch_names(&self) -> Vec<String> {
        self.branches.borrow().clone()
    }
}

impl GitClient for FakeGit {
    fn current_branch(&self) -> Result<String> {
        self.current
            .clone()
            .ok_or(BranchToolError::CurrentBranchNotFound)
    }

    fn local_branches(&self) -> Result<Vec<String>> {
        Ok(self.branch_names())
    }

    fn merged_branches(&self) -> Result<Vec<String>> {
        self.merged
            .clone()
            .ok_or_else(|| BranchToolError::git("branch --merged", "fatal: simulated failure"))
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("create {name}"));
        if self.branches.borrow().iter().any(|b| b == name) {
            return Err(BranchToolError::git(
                format!("checkout -b {name}"),
                format!("fatal: a branch named '{name}' already exists"),
            ));
        }
        self.branches.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        self.calls.borrow_mut().push(format!("delete {flag} {name}"));

        let refused = if force {
            self.undeletable.iter().any(|b| b == name)
        } else {
            self.unmerged.iter().any(|b| b == name)
        };
        if refused {
            return Err(BranchToolError::git(
                format!("branch {flag} {name}"),
                format!("error: the branch '{name}' is not fully merged"),
            ));
        }

        self.branches.borrow_mut().retain(|b| b != name);
        Ok(())
    }
}

/// A scripted answer for `ScriptedPrompter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    Input(String),
}

/// Prompter replaying queued answers; panics when the script runs out or mismatches
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for prompt: {message}"))
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message) {
            Answer::Confirm(answer) => Ok(answer),
            other => panic!("expected confirm answer for '{message}', got {other:?}"),
        }
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        match self.next(message) {
            Answer::Select(index) => {
                assert!(index < items.len(), "selection {index} out of range for '{message}'");
                Ok(index)
            }
            other => panic!("expected select answer for '{message}', got {other:?}"),
        }
    }

    fn input(&self, message: &str) -> Result<String> {
        match self.next(message) {
            Answer::Input(answer) => Ok(answer),
            other => panic!("expected input answer for '{message}', got {other:?}"),
        }
    }
}
