//! Menu definition files
//!
//! A TOML file describes a menu tree plus output settings. Precedence:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MENU_TREE_*)
//! 3. The definition file
//! 4. Built-in defaults (lowest priority)

mod build;
mod loader;
mod types;

pub use build::build_tree;
pub use loader::{load_with_warnings, parse_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{ColorMode, MenuFile, NodeDef, NodeDefKind, OutputConfig};
