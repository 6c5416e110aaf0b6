//! Branch naming conventions: stack grouping, the type/ticket tree and its rendering.

pub mod naming;
pub mod render;
pub mod stack;
pub mod tree;

pub use naming::{compose_branch_name, next_stacked_branch_name, sanitize, ChangeType};
pub use render::{render_tree, RenderOptions, CURRENT_SUFFIX};
pub use stack::{group_by_stack_root, stack_root, StackGroup, StackGroups};
pub use tree::{compose_tree, BranchNode, BranchTree, OTHER_BUCKET, SEPARATOR};

/// Merge the current branch into a listing, then de-duplicate and sort it
pub fn normalize_listing(current: &str, branches: Vec<String>) -> Vec<String> {
    let mut all = branches;
    all.push(current.to_string());
    all.sort();
    all.dedup();
    all
}

/// Group and nest a normalized listing in one step
pub fn build_tree<S: AsRef<str>>(branches: &[S]) -> BranchTree {
    compose_tree(&group_by_stack_root(branches))
}
