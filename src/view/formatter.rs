//! Index label formatters.
//!
//! A formatter turns a zero-based option position into the prefix printed in
//! front of the option name. Any human-facing offset is the formatter's
//! business; the menu always passes raw positions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Converts a zero-based position into a display prefix.
///
/// Implementations must be deterministic and total over all positions.
pub trait IndexLabelFormatter: Send + Sync {
    fn format(&self, position: usize) -> String;
}

impl<F> IndexLabelFormatter for F
where
    F: Fn(usize) -> String + Send + Sync,
{
    fn format(&self, position: usize) -> String {
        self(position)
    }
}

/// `1) `, `2) `, ...
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIndexFormatter;

impl IndexLabelFormatter for DefaultIndexFormatter {
    fn format(&self, position: usize) -> String {
        format!("{}) ", display_number(position))
    }
}

/// `[1] `, `[2] `, ...
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketIndexFormatter;

impl IndexLabelFormatter for BracketIndexFormatter {
    fn format(&self, position: usize) -> String {
        format!("[{}] ", display_number(position))
    }
}

/// `1. `, `2. `, ...
#[derive(Debug, Clone, Copy, Default)]
pub struct DotIndexFormatter;

impl IndexLabelFormatter for DotIndexFormatter {
    fn format(&self, position: usize) -> String {
        format!("{}. ", display_number(position))
    }
}

// usize::MAX has no successor; render it as the decimal string of MAX + 1.
fn display_number(position: usize) -> String {
    match position.checked_add(1) {
        Some(n) => n.to_string(),
        None => (u128::from(position as u64) + 1).to_string(),
    }
}

/// Built-in numbering styles selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndexStyle {
    #[default]
    Paren,
    Bracket,
    Dot,
}

impl IndexStyle {
    pub fn formatter(self) -> Arc<dyn IndexLabelFormatter> {
        match self {
            IndexStyle::Paren => Arc::new(DefaultIndexFormatter),
            IndexStyle::Bracket => Arc::new(BracketIndexFormatter),
            IndexStyle::Dot => Arc::new(DotIndexFormatter),
        }
    }
}

/// The formatter a menu gets when none is supplied
pub fn default_formatter() -> Arc<dyn IndexLabelFormatter> {
    Arc::new(DefaultIndexFormatter)
}
