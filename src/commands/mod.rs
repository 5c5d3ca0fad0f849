pub mod check;
pub mod demo;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};

use menu_tree::config::{with_env_overrides, ConfigWarning, MenuFile};
use menu_tree::ui::{color_enabled, detect_capabilities};
use menu_tree::{ColorMode, Theme};

/// Load a definition file with env overrides applied, printing warnings to stderr.
pub(crate) fn load_definition(path: &Path, theme: &Theme) -> Result<MenuFile> {
    let (file, warnings) = menu_tree::load_with_warnings(path)
        .with_context(|| format!("failed to load menu definition {}", path.display()))?;
    print_warnings(&warnings, theme);
    Ok(with_env_overrides(file))
}

pub(crate) fn print_warnings(warnings: &[ConfigWarning], theme: &Theme) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            theme.warning(theme.warning_icon()),
            warning
        );
    }
}

/// Theme for the current terminal; a CLI color flag beats the file setting.
pub(crate) fn resolve_theme(
    cli_color: Option<ColorMode>,
    file_color: ColorMode,
    unicode: bool,
) -> Theme {
    let caps = detect_capabilities();
    let mode = cli_color.unwrap_or(file_color);
    Theme::new(color_enabled(mode, &caps), unicode && caps.supports_unicode)
}

/// Theme used before a definition file has been read
pub(crate) fn startup_theme(cli_color: Option<ColorMode>) -> Theme {
    resolve_theme(cli_color, ColorMode::Auto, true)
}
