use crate::branches::{compose_branch_name, next_stacked_branch_name, ChangeType};
use crate::cli::output::Output;
use crate::cli::prompt::Prompter;
use crate::errors::Result;
use crate::git::GitClient;
use tracing::debug;

/// Answers given up front on the command line
#[derive(Debug, Clone, Default)]
pub struct NewBranchArgs {
    pub stack: bool,
    pub change_type: Option<ChangeType>,
    pub ticket: Option<String>,
    pub description: Option<String>,
    pub yes: bool,
}

impl NewBranchArgs {
    fn names_topic(&self) -> bool {
        self.change_type.is_some() || self.ticket.is_some() || self.description.is_some()
    }
}

/// The two ways a new branch name is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewBranchFlow {
    /// Continue the current branch's stack with the next suffix
    StackOnCurrent,
    /// Start a fresh `type/ticket_description` branch
    NewTopic,
}

fn choose_flow(args: &NewBranchArgs, prompter: &dyn Prompter, current: &str) -> Result<NewBranchFlow> {
    if args.stack {
        return Ok(NewBranchFlow::StackOnCurrent);
    }
    if args.names_topic() {
        return Ok(NewBranchFlow::NewTopic);
    }

    let choices = vec![
        format!("Stack a new branch on '{current}'"),
        "Start a new topic branch".to_string(),
    ];
    let choice = prompter.select("What kind of branch do you want to create?", &choices)?;

    Ok(if choice == 0 {
        NewBranchFlow::StackOnCurrent
    } else {
        NewBranchFlow::NewTopic
    })
}

fn collect_topic(args: &NewBranchArgs, prompter: &dyn Prompter) -> Result<String> {
    let change_type = match args.change_type {
        Some(change_type) => change_type,
        None => {
            let choices: Vec<String> = ChangeType::ALL
                .iter()
                .map(|t| format!("{:<10} {}", t.as_str(), t.description()))
                .collect();
            let index = prompter.select("Select the type of change", &choices)?;
            ChangeType::ALL[index]
        }
    };

    let ticket = match &args.ticket {
        Some(ticket) => ticket.clone(),
        None => prompter.input("Ticket reference")?,
    };

    let description = match &args.description {
        Some(description) => description.clone(),
        None => prompter.input("Short description")?,
    };

    Ok(compose_branch_name(change_type, &ticket, &description))
}

/// Derive a branch name, confirm it and branch off the current HEAD.
///
/// Returns 0 once the branch is created and checked out, 1 when the user
/// declines.
pub fn run(args: &NewBranchArgs, git: &dyn GitClient, prompter: &dyn Prompter) -> Result<i32> {
    Output::section("Check current situation");

    let current = git.current_branch()?;
    Output::definition("Current branch", &current);

    let flow = choose_flow(args, prompter, &current)?;
    debug!("New branch flow: {:?}", flow);

    let name = match flow {
        NewBranchFlow::StackOnCurrent => next_stacked_branch_name(&current)?,
        NewBranchFlow::NewTopic => collect_topic(args, prompter)?,
    };

    Output::section("Create branch");
    Output::definition("New branch", &name);

    if !args.yes && !prompter.confirm(&format!("Create and switch to '{name}'?"), true)? {
        Output::spacing();
        Output::warning("Branch creation aborted");
        return Ok(1);
    }

    git.create_branch(&name)?;

    Output::spacing();
    Output::success(format!("Switched to new branch '{name}'"));
    Ok(0)
}
