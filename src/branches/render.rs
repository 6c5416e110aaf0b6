use crate::branches::tree::{BranchNode, BranchTree};
use console::Style;

/// Appended to the branch that is checked out
pub const CURRENT_SUFFIX: &str = " [current]";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Options for rendering a branch tree
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI colors
    pub color: bool,
}

impl RenderOptions {
    fn paint(&self, text: &str, style: &Style) -> String {
        if self.color {
            style.clone().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

struct Renderer<'a> {
    current: &'a str,
    options: &'a RenderOptions,
    lines: Vec<String>,
}

impl Renderer<'_> {
    fn branch_line(&self, prefix: &str, connector: &str, name: &str) -> String {
        if name == self.current {
            let label = format!("{name}{CURRENT_SUFFIX}");
            format!(
                "{prefix}{connector}{}",
                self.options.paint(&label, &Style::new().yellow().bold())
            )
        } else {
            format!("{prefix}{connector}{name}")
        }
    }

    fn key_line(&self, prefix: &str, connector: &str, key: &str) -> String {
        format!(
            "{prefix}{connector}{}",
            self.options.paint(key, &Style::new().cyan())
        )
    }

    fn children(&mut self, children: &[(String, BranchNode)], prefix: &str) {
        for (position, (key, node)) in children.iter().enumerate() {
            let is_last = position + 1 == children.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let nested = format!("{prefix}{}", if is_last { SPACE } else { PIPE });

            match node {
                BranchNode::Branch(name) => {
                    let line = self.branch_line(prefix, connector, name);
                    self.lines.push(line);
                }
                BranchNode::Stack(names) => {
                    let line = self.key_line(prefix, connector, key);
                    self.lines.push(line);
                    self.stack(names, &nested);
                }
                BranchNode::Group(grandchildren) => {
                    let line = self.key_line(prefix, connector, key);
                    self.lines.push(line);
                    self.children(grandchildren, &nested);
                }
            }
        }
    }

    fn stack(&mut self, names: &[String], prefix: &str) {
        for (position, name) in names.iter().enumerate() {
            let connector = if position + 1 == names.len() {
                LAST_BRANCH
            } else {
                BRANCH
            };
            let line = self.branch_line(prefix, connector, name);
            self.lines.push(line);
        }
    }
}

/// Render a branch tree into display lines.
///
/// Change types are printed flush left; tickets, stacks and branches hang
/// below them with box-drawing connectors. A stack of one branch prints the
/// branch itself rather than its ticket key.
pub fn render_tree(tree: &BranchTree, current: &str, options: &RenderOptions) -> Vec<String> {
    let mut renderer = Renderer {
        current,
        options,
        lines: Vec::new(),
    };

    for (change_type, node) in tree.children() {
        let header = options.paint(change_type, &Style::new().bold());
        renderer.lines.push(header);

        match node {
            BranchNode::Group(children) => renderer.children(children, ""),
            BranchNode::Stack(names) => renderer.stack(names, ""),
            BranchNode::Branch(name) => {
                let line = renderer.branch_line("", LAST_BRANCH, name);
                renderer.lines.push(line);
            }
        }
    }

    renderer.lines
}
