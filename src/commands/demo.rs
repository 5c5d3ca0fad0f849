use std::io::Write;

use anyhow::Result;

use menu_tree::{ColorMode, MenuResult, MenuTree, NodeId, ReturnPolicy, ViewNode};

pub fn cmd_demo(color: Option<ColorMode>) -> Result<()> {
    let theme = super::startup_theme(color);
    let (mut tree, root) = demo_tree()?;
    super::run::run_on_console(&mut tree, root, theme, ReturnPolicy::Redisplay)
}

/// A root menu with one action and a submenu holding another action
pub(crate) fn demo_tree() -> MenuResult<(MenuTree, NodeId)> {
    let mut tree = MenuTree::new();
    let root = tree.insert(ViewNode::menu("Welcome!", ""));

    tree.push_child(
        root,
        ViewNode::action("Greeting", "Say hello", |out: &mut dyn Write| {
            writeln!(out, "Hello from the top-level menu.")?;
            Ok(())
        }),
    )?;

    let submenu = tree.push_child(root, ViewNode::menu("Submenu", "Submenu"))?;
    tree.push_child(
        submenu,
        ViewNode::action("Version", "Show version", |out: &mut dyn Write| {
            writeln!(out, "menu-tree {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }),
    )?;

    Ok((tree, root))
}
