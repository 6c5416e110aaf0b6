use crate::branches::stack::{stack_root, StackGroups};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Separator between the change type, the ticket key and the rest of a branch name
pub const SEPARATOR: &str = "/";

/// Bucket for branches whose name carries no separator
pub const OTHER_BUCKET: &str = "other";

/// A node of the branch tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchNode {
    /// A stack made of a single branch
    Branch(String),
    /// Two or more branches sharing a stack root
    Stack(Vec<String>),
    /// Keyed children, in insertion order
    Group(Vec<(String, BranchNode)>),
}

impl BranchNode {
    fn leaf(branches: &[String]) -> Self {
        match branches {
            [single] => BranchNode::Branch(single.clone()),
            _ => BranchNode::Stack(branches.to_vec()),
        }
    }

    /// All branch names below this node, depth first
    pub fn branches(&self) -> Vec<&str> {
        match self {
            BranchNode::Branch(name) => vec![name.as_str()],
            BranchNode::Stack(names) => names.iter().map(String::as_str).collect(),
            BranchNode::Group(children) => children
                .iter()
                .flat_map(|(_, child)| child.branches())
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&BranchNode> {
        match self {
            BranchNode::Group(children) => children
                .iter()
                .find(|(child_key, _)| child_key == key)
                .map(|(_, child)| child),
            _ => None,
        }
    }
}

/// Branches nested by change type, then ticket key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchTree {
    children: Vec<(String, BranchNode)>,
}

impl BranchTree {
    pub fn children(&self) -> &[(String, BranchNode)] {
        &self.children
    }

    pub fn get(&self, change_type: &str) -> Option<&BranchNode> {
        self.children
            .iter()
            .find(|(key, _)| key == change_type)
            .map(|(_, node)| node)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All branch names in the tree, in display order
    pub fn branches(&self) -> Vec<&str> {
        self.children
            .iter()
            .flat_map(|(_, node)| node.branches())
            .collect()
    }
}

fn key_taken(children: &[(String, BranchNode)], key: &str) -> bool {
    children.iter().any(|(child_key, _)| child_key == key)
}

/// `root`, or `root~N` for the first N no sibling uses
fn free_key(children: &[(String, BranchNode)], root: &str) -> String {
    if !key_taken(children, root) {
        return root.to_string();
    }
    (2u64..)
        .map(|n| format!("{root}~{n}"))
        .find(|candidate| !key_taken(children, candidate))
        .unwrap_or_else(|| root.to_string())
}

/// Add a leaf under `key`, or under its full stack `root` when a sibling already uses `key`
fn push_leaf(children: &mut Vec<(String, BranchNode)>, key: &str, root: &str, leaf: BranchNode) {
    let key = if key_taken(children, key) {
        free_key(children, root)
    } else {
        key.to_string()
    };
    children.push((key, leaf));
}

/// Find the group child named `key`, creating it at the end when missing.
///
/// A leaf already holding `key` (`feature/abc-2` next to `feature/abc/x`) is
/// re-keyed by its full stack root so the group can take the short key.
fn group_entry<'a>(
    children: &'a mut Vec<(String, BranchNode)>,
    key: &str,
) -> &'a mut Vec<(String, BranchNode)> {
    let position = children
        .iter()
        .position(|(child_key, node)| child_key == key && matches!(node, BranchNode::Group(_)));

    let position = match position {
        Some(position) => position,
        None => {
            if let Some(clash) = children.iter().position(|(child_key, _)| child_key == key) {
                let root = children[clash]
                    .1
                    .branches()
                    .first()
                    .map(|branch| stack_root(branch).to_string())
                    .unwrap_or_else(|| key.to_string());
                let rekeyed = free_key(children, &root);
                children[clash].0 = rekeyed;
            }
            children.push((key.to_string(), BranchNode::Group(Vec::new())));
            children.len() - 1
        }
    };

    match &mut children[position].1 {
        BranchNode::Group(grandchildren) => grandchildren,
        _ => unreachable!("position always points at a group"),
    }
}

/// Nest stack groups into a `type -> ticket -> branch(es)` tree
pub fn compose_tree(groups: &StackGroups) -> BranchTree {
    let mut tree = BranchTree::default();

    for group in groups.iter() {
        let leaf = BranchNode::leaf(&group.branches);
        let segments: Vec<&str> = group.root.split(SEPARATOR).collect();

        match segments.as_slice() {
            [] | [_] => {
                let other = group_entry(&mut tree.children, OTHER_BUCKET);
                push_leaf(other, &group.root, &group.root, leaf);
            }
            [change_type, key] => {
                let by_type = group_entry(&mut tree.children, change_type);
                push_leaf(by_type, key, &group.root, leaf);
            }
            [change_type, sub_key, rest @ ..] => {
                let by_type = group_entry(&mut tree.children, change_type);
                let by_sub_key = group_entry(by_type, sub_key);
                push_leaf(by_sub_key, &rest.join(SEPARATOR), &group.root, leaf);
            }
        }
    }

    tree
}

impl Serialize for BranchNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BranchNode::Branch(name) => serializer.serialize_str(name),
            BranchNode::Stack(names) => {
                let mut seq = serializer.serialize_seq(Some(names.len()))?;
                for name in names {
                    seq.serialize_element(name)?;
                }
                seq.end()
            }
            BranchNode::Group(children) => serialize_children(children, serializer),
        }
    }
}

impl Serialize for BranchTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_children(&self.children, serializer)
    }
}

fn serialize_children<S: Serializer>(
    children: &[(String, BranchNode)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(children.len()))?;
    for (key, node) in children {
        map.serialize_entry(key, node)?;
    }
    map.end()
}
