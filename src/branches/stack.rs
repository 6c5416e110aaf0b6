use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static STACK_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([0-9]+)$").expect("stack suffix pattern is valid"));

/// Split a branch name into its stack root and the digits of its `-N` suffix.
///
/// Returns `None` for the digits when the name carries no numeric suffix, in
/// which case the whole name is the root.
pub fn split_stack_suffix(name: &str) -> (&str, Option<&str>) {
    match STACK_SUFFIX.captures(name) {
        Some(caps) => {
            let whole = caps.get(0).map_or(name.len(), |m| m.start());
            let digits = caps.get(1).map(|m| m.as_str());
            (&name[..whole], digits)
        }
        None => (name, None),
    }
}

/// The branch name with a trailing `-<digits>` suffix removed
pub fn stack_root(name: &str) -> &str {
    split_stack_suffix(name).0
}

/// Branches sharing one stack root, in listing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackGroup {
    pub root: String,
    pub branches: Vec<String>,
}

/// Stack groups in first-occurrence order of their roots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackGroups {
    groups: Vec<StackGroup>,
    index: HashMap<String, usize>,
}

impl StackGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a branch to the group of its stack root, creating the group on first sight
    pub fn push(&mut self, branch: &str) {
        let root = stack_root(branch);
        match self.index.get(root) {
            Some(&position) => self.groups[position].branches.push(branch.to_string()),
            None => {
                self.index.insert(root.to_string(), self.groups.len());
                self.groups.push(StackGroup {
                    root: root.to_string(),
                    branches: vec![branch.to_string()],
                });
            }
        }
    }

    pub fn get(&self, root: &str) -> Option<&[String]> {
        self.index
            .get(root)
            .map(|&position| self.groups[position].branches.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StackGroup> {
        self.groups.iter()
    }

    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.root.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group an already sorted branch list by stack root
pub fn group_by_stack_root<S: AsRef<str>>(branches: &[S]) -> StackGroups {
    let mut groups = StackGroups::new();
    for branch in branches {
        groups.push(branch.as_ref());
    }
    groups
}
