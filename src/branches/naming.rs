use crate::branches::stack::split_stack_suffix;
use crate::branches::tree::SEPARATOR;
use crate::errors::{BranchToolError, Result};
use std::fmt;

/// The kinds of change a new topic branch can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChangeType {
    Feature,
    Bugfix,
    Hotfix,
    Chore,
    Refactor,
    Docs,
    Test,
}

impl ChangeType {
    pub const ALL: [ChangeType; 7] = [
        ChangeType::Feature,
        ChangeType::Bugfix,
        ChangeType::Hotfix,
        ChangeType::Chore,
        ChangeType::Refactor,
        ChangeType::Docs,
        ChangeType::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Feature => "feature",
            ChangeType::Bugfix => "bugfix",
            ChangeType::Hotfix => "hotfix",
            ChangeType::Chore => "chore",
            ChangeType::Refactor => "refactor",
            ChangeType::Docs => "docs",
            ChangeType::Test => "test",
        }
    }

    /// One-line explanation shown next to the type in the wizard
    pub fn description(&self) -> &'static str {
        match self {
            ChangeType::Feature => "new functionality",
            ChangeType::Bugfix => "fix for a bug",
            ChangeType::Hotfix => "urgent fix on a released version",
            ChangeType::Chore => "maintenance, dependencies, tooling",
            ChangeType::Refactor => "restructuring without behaviour change",
            ChangeType::Docs => "documentation only",
            ChangeType::Test => "tests only",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replace every character that is not an ASCII letter or digit with `-`
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Build `type/ticket_description` from raw wizard answers
pub fn compose_branch_name(change_type: ChangeType, ticket: &str, description: &str) -> String {
    format!(
        "{}{SEPARATOR}{}_{}",
        sanitize(change_type.as_str()),
        sanitize(ticket),
        sanitize(description)
    )
}

/// Name of the next branch stacked on `current`.
///
/// `feature/abc-3` becomes `feature/abc-4`; a branch without a numeric
/// suffix gets `-2`.
pub fn next_stacked_branch_name(current: &str) -> Result<String> {
    match split_stack_suffix(current) {
        (root, Some(digits)) => {
            let next = digits
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_add(1))
                .ok_or_else(|| BranchToolError::StackSuffix {
                    branch: current.to_string(),
                })?;
            Ok(format!("{root}-{next}"))
        }
        (root, None) => Ok(format!("{root}-2")),
    }
}
