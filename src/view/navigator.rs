//! The display/select/dispatch loop.
//!
//! Navigation keeps an explicit stack of the menus entered so far instead of
//! recursing through `activate` calls, so nesting depth never grows the call
//! stack and the current position can be inspected between steps.
//!
//! One menu visit goes DISPLAY -> AWAIT_INPUT -> VALIDATE -> DISPATCH:
//!
//! - DISPLAY prints a blank line, the title, one numbered line per child and a
//!   final back (or quit, at the root) entry.
//! - AWAIT_INPUT prints the selection prompt and reads one line.
//! - VALIDATE re-prompts with the error message until `1..=N+1` is entered.
//! - DISPATCH descends into a submenu, runs an action, or goes back.
//!
//! An action prints a blank line and its title before its work runs.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{MenuError, MenuResult};
use crate::ui::Theme;

use super::input::{read_selection, resolve_selection, Selection};
use super::node::{NodeId, NodeKind};
use super::render::render_menu;
use super::tree::MenuTree;

/// What happens after an action finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReturnPolicy {
    /// The whole activation ends once the action returns
    #[default]
    Exit,
    /// The menu that listed the action is displayed again
    Redisplay,
}

/// Drives menu activation over injected input and output streams
pub struct Navigator<R, W> {
    input: R,
    output: W,
    theme: Theme,
    policy: ReturnPolicy,
    stack: Vec<NodeId>,
}

impl<R: BufRead, W: Write> Navigator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            theme: Theme::plain(),
            policy: ReturnPolicy::default(),
            stack: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Menus currently entered, outermost first
    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Activate `start` and run until the interaction it began is over.
    ///
    /// Returns when the user quits a menu that has no parent, or when an
    /// action finishes under [`ReturnPolicy::Exit`]. Action failures are
    /// returned unchanged inside [`MenuError::Action`].
    pub fn activate(&mut self, tree: &mut MenuTree, start: NodeId) -> MenuResult<()> {
        self.stack.clear();

        if !tree.get(start)?.is_menu() {
            return self.run_action(tree, start);
        }
        self.stack.push(start);

        while let Some(&menu_id) = self.stack.last() {
            match self.select(tree, menu_id)? {
                Selection::Back => self.go_back(tree, menu_id)?,
                Selection::Child(position) => {
                    let child = tree.menu(menu_id)?.children[position];
                    if tree.get(child)?.is_menu() {
                        debug!(menu = %menu_id, child = %child, "entering submenu");
                        self.stack.push(child);
                    } else {
                        self.run_action(tree, child)?;
                        if self.policy == ReturnPolicy::Exit {
                            self.stack.clear();
                        }
                    }
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Leave `menu_id`. With a parent link the parent is shown next;
    /// without one the activation ends.
    fn go_back(&mut self, tree: &MenuTree, menu_id: NodeId) -> MenuResult<()> {
        self.stack.pop();
        match tree.parent(menu_id)? {
            None => {
                debug!(menu = %menu_id, "quit");
                self.stack.clear();
            }
            Some(parent) => {
                debug!(menu = %menu_id, parent = %parent, "back");
                match self.stack.iter().rposition(|&id| id == parent) {
                    Some(pos) => self.stack.truncate(pos + 1),
                    None => self.stack.push(parent),
                }
            }
        }
        Ok(())
    }

    /// DISPLAY, AWAIT_INPUT and VALIDATE for one visit of a menu
    fn select(&mut self, tree: &MenuTree, menu_id: NodeId) -> MenuResult<Selection> {
        let listing = render_menu(tree, menu_id, &self.theme)?;
        let menu = tree.menu(menu_id)?;
        let error_message = tree.get(menu_id)?.input_error_message();

        self.output.write_all(listing.as_bytes())?;
        self.output.write_all(menu.selection_message().as_bytes())?;
        self.output.flush()?;

        loop {
            let selection = read_selection(&mut self.input)?;
            if let Some(resolved) = resolve_selection(selection, menu.child_count()) {
                return Ok(resolved);
            }
            trace!(menu = %menu_id, selection, "rejected selection");
            self.output
                .write_all(self.theme.error(error_message).as_bytes())?;
            self.output.flush()?;
        }
    }

    fn run_action(&mut self, tree: &mut MenuTree, id: NodeId) -> MenuResult<()> {
        let node = tree.get_mut(id)?;
        let name = node.running_title.clone();
        debug!(action = %id, name = %name, "running action");

        let NodeKind::Action(action) = &mut node.kind else {
            return Err(MenuError::NotAnAction { name });
        };
        let heading = format!("\n{}\n", self.theme.title(&name));
        self.output.write_all(heading.as_bytes())?;
        let result = action.run(&mut self.output);
        self.output.flush()?;

        result.map_err(|source| {
            warn!(action = %id, name = %name, error = %source, "action failed");
            MenuError::Action { name, source }
        })
    }
}

impl MenuTree {
    /// Activate `id` with a default [`Navigator`] over the given streams
    pub fn activate<R: BufRead, W: Write>(
        &mut self,
        id: NodeId,
        input: R,
        output: W,
    ) -> MenuResult<()> {
        Navigator::new(input, output).activate(self, id)
    }
}
