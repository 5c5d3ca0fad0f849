//! Reading and validating menu selections.

use std::io::BufRead;

use crate::error::{MenuError, MenuResult};

/// Value a selection takes when the input is not an integer
pub const INVALID_SELECTION: i64 = -1;

/// What a valid selection resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based position in the child list
    Child(usize),
    /// The synthetic last option
    Back,
}

/// Parse the first whitespace-separated token of `line` as an integer.
///
/// Anything that is not an integer becomes [`INVALID_SELECTION`].
pub fn parse_selection(line: &str) -> i64 {
    line.split_whitespace()
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .unwrap_or(INVALID_SELECTION)
}

/// Read one selection, consuming the whole line it came from.
///
/// Blank lines are skipped while waiting for a token. End of input is
/// reported as [`MenuError::InputClosed`].
pub fn read_selection<R: BufRead + ?Sized>(input: &mut R) -> MenuResult<i64> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }
        if !line.trim().is_empty() {
            return Ok(parse_selection(&line));
        }
    }
}

/// `1..=child_count` are children, `child_count + 1` is back/quit.
pub fn is_valid_selection(selection: i64, child_count: usize) -> bool {
    resolve_selection(selection, child_count).is_some()
}

pub fn resolve_selection(selection: i64, child_count: usize) -> Option<Selection> {
    let selection = u64::try_from(selection).ok()?;
    let count = child_count as u64;
    match selection {
        0 => None,
        s if s <= count => Some(Selection::Child((s - 1) as usize)),
        s if s == count + 1 => Some(Selection::Back),
        _ => None,
    }
}
