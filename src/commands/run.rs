use std::path::Path;

use anyhow::Result;
use tracing::info;

use menu_tree::{build_tree, ColorMode, MenuError, MenuTree, Navigator, NodeId, ReturnPolicy, Theme};

pub fn cmd_run(file: &Path, redisplay: bool, color: Option<ColorMode>) -> Result<()> {
    let definition = super::load_definition(file, &super::startup_theme(color))?;
    let theme = super::resolve_theme(color, definition.output.color, definition.output.unicode);

    let policy = if redisplay {
        ReturnPolicy::Redisplay
    } else {
        definition.output.after_action
    };

    let (mut tree, root) = build_tree(&definition, file)?;
    info!(file = %file.display(), nodes = tree.len(), "starting menu");
    run_on_console(&mut tree, root, theme, policy)
}

/// Activate `root` on stdin/stdout. Closing stdin ends the session quietly.
pub(crate) fn run_on_console(
    tree: &mut MenuTree,
    root: NodeId,
    theme: Theme,
    policy: ReturnPolicy,
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut navigator = Navigator::new(stdin.lock(), std::io::stdout())
        .with_theme(theme)
        .with_return_policy(policy);

    match navigator.activate(tree, root) {
        Ok(()) => Ok(()),
        Err(MenuError::InputClosed) => {
            println!();
            info!("input closed, leaving menu");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
