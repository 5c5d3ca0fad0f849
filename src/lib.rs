//! menu-tree - numbered, navigable text menus for terminal programs
//!
//! A tree of menus and actions is rendered one level at a time as a numbered
//! list. The user enters a number to descend into a submenu or run an action,
//! and the last number of every listing goes back to the parent menu (or
//! quits at the root).
//!
//! ```no_run
//! use std::io::Write;
//!
//! use menu_tree::{MenuTree, Navigator, ViewNode};
//!
//! let mut tree = MenuTree::new();
//! let root = tree.insert(ViewNode::menu("Welcome!", ""));
//! tree.push_child(root, ViewNode::action("Hello", "Say hello", |out| {
//!     writeln!(out, "Hello, world!")?;
//!     Ok(())
//! }))?;
//!
//! let stdin = std::io::stdin();
//! Navigator::new(stdin.lock(), std::io::stdout()).activate(&mut tree, root)?;
//! # Ok::<(), menu_tree::MenuError>(())
//! ```

pub mod config;
pub mod error;
pub mod ui;
pub mod view;

// Re-exports for convenience
pub use config::{build_tree, load_with_warnings, ColorMode, ConfigWarning, MenuFile};
pub use error::{MenuError, MenuResult};
pub use ui::Theme;
pub use view::{
    IndexLabelFormatter, IndexStyle, MenuNode, MenuTree, Navigator, NodeId, NodeKind,
    ReturnPolicy, ViewNode,
};
