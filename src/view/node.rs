//! Tree members: the shared view header plus the menu and action variants.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use super::formatter::{default_formatter, IndexLabelFormatter};

pub const DEFAULT_INPUT_ERROR_MESSAGE: &str = "Invalid input, please try again: ";
pub const DEFAULT_SELECTION_MESSAGE: &str = "Please enter a number to continue: ";
pub const DEFAULT_BACK_LABEL: &str = "Back";
pub const DEFAULT_QUIT_LABEL: &str = "Quit";

/// Handle to a node stored in a [`MenuTree`](super::MenuTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Externally supplied unit of work run by an action node.
///
/// The writer is the navigator's output stream.
pub type Work = Box<dyn FnMut(&mut dyn Write) -> anyhow::Result<()>>;

/// Any member of a menu tree
pub struct ViewNode {
    pub(crate) running_title: String,
    pub(crate) name_in_parent: String,
    pub(crate) input_error_message: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

/// The two node variants
pub enum NodeKind {
    Menu(MenuNode),
    Action(ActionNode),
}

impl ViewNode {
    /// A menu with default prompts, labels and formatter
    pub fn menu(running_title: impl Into<String>, name_in_parent: impl Into<String>) -> Self {
        Self::with_menu(running_title, name_in_parent, MenuNode::new())
    }

    pub fn with_menu(
        running_title: impl Into<String>,
        name_in_parent: impl Into<String>,
        menu: MenuNode,
    ) -> Self {
        Self::new(running_title, name_in_parent, NodeKind::Menu(menu))
    }

    pub fn action<F>(
        running_title: impl Into<String>,
        name_in_parent: impl Into<String>,
        work: F,
    ) -> Self
    where
        F: FnMut(&mut dyn Write) -> anyhow::Result<()> + 'static,
    {
        Self::new(
            running_title,
            name_in_parent,
            NodeKind::Action(ActionNode::new(work)),
        )
    }

    fn new(
        running_title: impl Into<String>,
        name_in_parent: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            running_title: running_title.into(),
            name_in_parent: name_in_parent.into(),
            input_error_message: DEFAULT_INPUT_ERROR_MESSAGE.to_string(),
            parent: None,
            kind,
        }
    }

    pub fn with_input_error_message(mut self, message: impl Into<String>) -> Self {
        self.input_error_message = message.into();
        self
    }

    pub fn running_title(&self) -> &str {
        &self.running_title
    }

    pub fn name_in_parent(&self) -> &str {
        &self.name_in_parent
    }

    pub fn input_error_message(&self) -> &str {
        &self.input_error_message
    }

    /// Non-owning link to the menu this node was last added to
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_menu(&self) -> bool {
        matches!(self.kind, NodeKind::Menu(_))
    }

    pub fn as_menu(&self) -> Option<&MenuNode> {
        match &self.kind {
            NodeKind::Menu(menu) => Some(menu),
            NodeKind::Action(_) => None,
        }
    }

    pub fn as_menu_mut(&mut self) -> Option<&mut MenuNode> {
        match &mut self.kind {
            NodeKind::Menu(menu) => Some(menu),
            NodeKind::Action(_) => None,
        }
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("running_title", &self.running_title)
            .field("name_in_parent", &self.name_in_parent)
            .field("parent", &self.parent)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Menu(menu) => f.debug_tuple("Menu").field(menu).finish(),
            NodeKind::Action(_) => f.write_str("Action"),
        }
    }
}

/// Menu-specific state: ordered children and the configurable strings
pub struct MenuNode {
    pub(crate) children: Vec<NodeId>,
    selection_message: String,
    back_label: String,
    quit_label: String,
    formatter: Arc<dyn IndexLabelFormatter>,
}

impl MenuNode {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            selection_message: DEFAULT_SELECTION_MESSAGE.to_string(),
            back_label: DEFAULT_BACK_LABEL.to_string(),
            quit_label: DEFAULT_QUIT_LABEL.to_string(),
            formatter: default_formatter(),
        }
    }

    pub fn with_selection_message(mut self, message: impl Into<String>) -> Self {
        self.selection_message = message.into();
        self
    }

    pub fn with_back_label(mut self, label: impl Into<String>) -> Self {
        self.back_label = label.into();
        self
    }

    pub fn with_quit_label(mut self, label: impl Into<String>) -> Self {
        self.quit_label = label.into();
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn IndexLabelFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn selection_message(&self) -> &str {
        &self.selection_message
    }

    pub fn back_label(&self) -> &str {
        &self.back_label
    }

    pub fn quit_label(&self) -> &str {
        &self.quit_label
    }

    pub fn formatter(&self) -> &dyn IndexLabelFormatter {
        self.formatter.as_ref()
    }

    pub fn set_formatter(&mut self, formatter: Arc<dyn IndexLabelFormatter>) {
        self.formatter = formatter;
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Default for MenuNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MenuNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuNode")
            .field("children", &self.children)
            .field("selection_message", &self.selection_message)
            .field("back_label", &self.back_label)
            .field("quit_label", &self.quit_label)
            .finish_non_exhaustive()
    }
}

/// Leaf node that runs one unit of work
pub struct ActionNode {
    work: Work,
}

impl ActionNode {
    pub fn new<F>(work: F) -> Self
    where
        F: FnMut(&mut dyn Write) -> anyhow::Result<()> + 'static,
    {
        Self {
            work: Box::new(work),
        }
    }

    pub(crate) fn run(&mut self, out: &mut dyn Write) -> anyhow::Result<()> {
        (self.work)(out)
    }
}
