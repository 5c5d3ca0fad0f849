//! Turning a definition file into a live [`MenuTree`].

use std::io::Write;
use std::path::Path;
use std::process::Command;

use anyhow::Context;

use crate::error::{MenuError, MenuResult};
use crate::view::{
    IndexStyle, MenuNode, MenuTree, NodeId, ViewNode, DEFAULT_BACK_LABEL,
    DEFAULT_INPUT_ERROR_MESSAGE, DEFAULT_QUIT_LABEL, DEFAULT_SELECTION_MESSAGE,
};

use super::types::{MenuFile, NodeDef, NodeDefKind};

/// Strings a menu passes down to nested menus that do not set their own
#[derive(Debug, Clone)]
struct Inherited {
    error_message: String,
    selection_message: String,
    back_label: String,
    quit_label: String,
    index_style: IndexStyle,
}

impl Inherited {
    fn apply(&self, def: &NodeDef) -> Self {
        Self {
            error_message: def
                .error_message
                .clone()
                .unwrap_or_else(|| self.error_message.clone()),
            selection_message: def
                .selection_message
                .clone()
                .unwrap_or_else(|| self.selection_message.clone()),
            back_label: def
                .back_label
                .clone()
                .unwrap_or_else(|| self.back_label.clone()),
            quit_label: def
                .quit_label
                .clone()
                .unwrap_or_else(|| self.quit_label.clone()),
            index_style: def.index_style.unwrap_or(self.index_style),
        }
    }
}

/// Build the tree described by `file`. Returns the tree and its root id.
///
/// `source` is only used in error messages.
pub fn build_tree(file: &MenuFile, source: &Path) -> MenuResult<(MenuTree, NodeId)> {
    if file.menu.kind != NodeDefKind::Menu {
        return Err(invalid(source, "the top-level [menu] must be a menu"));
    }

    let defaults = Inherited {
        error_message: DEFAULT_INPUT_ERROR_MESSAGE.to_string(),
        selection_message: DEFAULT_SELECTION_MESSAGE.to_string(),
        back_label: DEFAULT_BACK_LABEL.to_string(),
        quit_label: DEFAULT_QUIT_LABEL.to_string(),
        index_style: file.output.index_style,
    };

    let mut tree = MenuTree::new();
    let root = build_node(&mut tree, &file.menu, &defaults, "menu", source)?;
    Ok((tree, root))
}

fn build_node(
    tree: &mut MenuTree,
    def: &NodeDef,
    inherited: &Inherited,
    at: &str,
    source: &Path,
) -> MenuResult<NodeId> {
    let title = def.display_title();
    if title.is_empty() {
        return Err(invalid(source, &format!("{at}: needs a `title` or `name`")));
    }

    match def.kind {
        NodeDefKind::Menu => {
            if def.message.is_some() || def.command.is_some() {
                return Err(invalid(
                    source,
                    &format!("{at}: menus cannot have `message` or `command`"),
                ));
            }

            let strings = inherited.apply(def);
            let menu = MenuNode::new()
                .with_selection_message(strings.selection_message.clone())
                .with_back_label(strings.back_label.clone())
                .with_quit_label(strings.quit_label.clone())
                .with_formatter(strings.index_style.formatter());
            let node = ViewNode::with_menu(title, def.name.clone(), menu)
                .with_input_error_message(strings.error_message.clone());
            let id = tree.insert(node);

            for (i, item) in def.items.iter().enumerate() {
                let child = build_node(tree, item, &strings, &format!("{at}.items[{i}]"), source)?;
                tree.add_child(id, child)?;
            }
            Ok(id)
        }
        NodeDefKind::Action => {
            if !def.items.is_empty() {
                return Err(invalid(source, &format!("{at}: actions cannot have `items`")));
            }
            if def.message.is_none() && def.command.is_none() {
                return Err(invalid(
                    source,
                    &format!("{at}: actions need a `message` or a `command`"),
                ));
            }

            let message = def.message.clone();
            let command = def.command.clone();
            let args = def.args.clone();
            let node = ViewNode::action(title, def.name.clone(), move |out: &mut dyn Write| {
                run_definition_action(out, message.as_deref(), command.as_deref(), &args)
            });
            Ok(tree.insert(node))
        }
    }
}

/// Print the message, then run the command with inherited stdio.
fn run_definition_action(
    out: &mut dyn Write,
    message: Option<&str>,
    command: Option<&str>,
    args: &[String],
) -> anyhow::Result<()> {
    if let Some(message) = message {
        writeln!(out, "{message}")?;
    }

    if let Some(program) = command {
        out.flush()?;
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to start '{program}'"))?;
        if !status.success() {
            anyhow::bail!("'{program}' exited with {status}");
        }
    }

    Ok(())
}

fn invalid(source: &Path, message: &str) -> MenuError {
    MenuError::InvalidDefinition {
        file: source.to_path_buf(),
        message: message.to_string(),
    }
}
