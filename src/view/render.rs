//! Rendering menus to strings.
//!
//! The navigator writes these strings to its output; keeping rendering pure
//! lets tests compare listings without a console.

use crate::error::MenuResult;
use crate::ui::Theme;

use super::node::{NodeId, NodeKind};
use super::tree::MenuTree;

/// Render the listing of a menu: separator, title, one line per child and the
/// trailing back/quit entry. The selection prompt is not included.
pub fn render_menu(tree: &MenuTree, menu_id: NodeId, theme: &Theme) -> MenuResult<String> {
    let node = tree.get(menu_id)?;
    let menu = tree.menu(menu_id)?;
    let formatter = menu.formatter();

    let mut out = String::from("\n");
    out.push_str(&theme.title(node.running_title()));
    out.push('\n');

    for (position, child) in menu.children.iter().enumerate() {
        let child = tree.get(*child)?;
        out.push_str(&theme.index_label(&formatter.format(position)));
        out.push_str(child.name_in_parent());
        out.push('\n');
    }

    let back_or_quit = if node.parent().is_none() {
        menu.quit_label()
    } else {
        menu.back_label()
    };
    out.push_str(&theme.index_label(&formatter.format(menu.child_count())));
    out.push_str(back_or_quit);
    out.push('\n');

    Ok(out)
}

/// Render an indented outline of the subtree rooted at `root`.
///
/// A node that already appears on the path from the root is printed once more
/// with the cycle icon and not expanded again.
pub fn render_outline(tree: &MenuTree, root: NodeId, theme: &Theme) -> MenuResult<String> {
    let mut out = String::new();
    let mut path = Vec::new();
    outline_node(tree, root, 0, None, theme, &mut path, &mut out)?;
    Ok(out)
}

fn outline_node(
    tree: &MenuTree,
    id: NodeId,
    depth: usize,
    label: Option<String>,
    theme: &Theme,
    path: &mut Vec<NodeId>,
    out: &mut String,
) -> MenuResult<()> {
    let node = tree.get(id)?;
    let indent = "  ".repeat(depth);
    let label = label.unwrap_or_default();
    let name = if depth == 0 || node.name_in_parent().is_empty() {
        node.running_title()
    } else {
        node.name_in_parent()
    };

    if path.contains(&id) {
        out.push_str(&format!("{}{}{} {}\n", indent, label, theme.cycle_icon(), name));
        return Ok(());
    }

    match node.kind() {
        NodeKind::Action(_) => {
            out.push_str(&format!("{}{}{} {}\n", indent, label, theme.action_icon(), name));
        }
        NodeKind::Menu(menu) => {
            out.push_str(&format!("{}{}{} {}\n", indent, label, theme.menu_icon(), name));
            path.push(id);
            for (position, child) in menu.children.iter().enumerate() {
                let label = menu.formatter().format(position);
                outline_node(tree, *child, depth + 1, Some(label), theme, path, out)?;
            }
            path.pop();
        }
    }

    Ok(())
}
