//! Error types for menu-tree
//!
//! Uses `thiserror` for library errors. User input mistakes never show up
//! here; they are retried inside the selection loop.

use std::path::PathBuf;
use thiserror::Error;

use crate::view::NodeId;

/// Result type alias for menu-tree operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu-tree operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Removing or addressing a child position the menu does not have
    #[error("child position {position} is out of range for menu '{menu}' with {len} children")]
    ChildIndexOutOfRange {
        menu: String,
        position: usize,
        len: usize,
    },

    /// A node id that does not belong to this tree
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),

    /// Children can only be attached to menu nodes
    #[error("node '{name}' is an action and cannot hold children")]
    NotAMenu { name: String },

    /// Only action nodes can be run
    #[error("node '{name}' is a menu, not an action")]
    NotAnAction { name: String },

    /// The input stream ended while a selection was pending
    #[error("input closed while waiting for a menu selection")]
    InputClosed,

    /// An action's work unit failed
    #[error("action '{name}' failed")]
    Action {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// IO error on the console streams
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid menu definition file
    #[error("invalid menu definition in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },
}
