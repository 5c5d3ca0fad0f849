use std::path::Path;

use anyhow::Result;

use menu_tree::view::render_outline;
use menu_tree::{build_tree, ColorMode};

pub fn cmd_check(file: &Path, color: Option<ColorMode>) -> Result<()> {
    let definition = super::load_definition(file, &super::startup_theme(color))?;
    let theme = super::resolve_theme(color, definition.output.color, definition.output.unicode);

    let (tree, root) = build_tree(&definition, file)?;

    print!("{}", render_outline(&tree, root, &theme)?);
    println!();
    println!(
        "{} {}: {} nodes",
        theme.success_icon(),
        file.display(),
        tree.len()
    );

    Ok(())
}
