//! Terminal presentation: design tokens and capability detection.

pub mod terminal;
pub mod theme;

pub use terminal::{color_enabled, detect_capabilities, TerminalCapabilities};
pub use theme::Theme;
