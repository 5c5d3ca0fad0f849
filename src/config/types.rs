//! Menu definition file types

use serde::{Deserialize, Serialize};

use crate::view::{IndexStyle, ReturnPolicy};

/// A whole menu definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFile {
    #[serde(default)]
    pub output: OutputConfig,

    pub menu: NodeDef,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub index_style: IndexStyle,

    #[serde(default)]
    pub after_action: ReturnPolicy,

    /// Use Unicode icons in `check` outlines when the terminal allows it
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            index_style: IndexStyle::default(),
            after_action: ReturnPolicy::default(),
            unicode: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Kind of a node definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeDefKind {
    #[default]
    Menu,
    Action,
}

/// One node of the definition. Menu and action fields share one table so
/// unknown keys can be reported at any depth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDef {
    #[serde(default)]
    pub kind: NodeDefKind,

    /// Label shown in the parent's listing
    #[serde(default)]
    pub name: String,

    /// Heading printed when entered; falls back to `name`
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub selection_message: Option<String>,

    #[serde(default)]
    pub back_label: Option<String>,

    #[serde(default)]
    pub quit_label: Option<String>,

    #[serde(default)]
    pub index_style: Option<IndexStyle>,

    #[serde(default)]
    pub items: Vec<NodeDef>,

    /// Action: text printed when run
    #[serde(default)]
    pub message: Option<String>,

    /// Action: program started when run
    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,
}

impl NodeDef {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
