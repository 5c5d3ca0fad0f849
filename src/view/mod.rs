//! Numbered menu trees
//!
//! # Module Structure
//!
//! - `node` - ViewNode header plus the menu and action variants
//! - `tree` - arena owning every node, child lists and parent links
//! - `formatter` - index label formatters
//! - `input` - selection parsing and validation
//! - `render` - listing and outline rendering
//! - `navigator` - the display/select/dispatch loop

mod formatter;
mod input;
mod navigator;
mod node;
mod render;
mod tree;

pub use formatter::{
    default_formatter, BracketIndexFormatter, DefaultIndexFormatter, DotIndexFormatter,
    IndexLabelFormatter, IndexStyle,
};
pub use input::{
    is_valid_selection, parse_selection, read_selection, resolve_selection, Selection,
    INVALID_SELECTION,
};
pub use navigator::{Navigator, ReturnPolicy};
pub use node::{
    ActionNode, MenuNode, NodeId, NodeKind, ViewNode, Work, DEFAULT_BACK_LABEL,
    DEFAULT_INPUT_ERROR_MESSAGE, DEFAULT_QUIT_LABEL, DEFAULT_SELECTION_MESSAGE,
};
pub use render::{render_menu, render_outline};
pub use tree::MenuTree;
