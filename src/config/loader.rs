//! Loading menu definition files

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MenuError, MenuResult};
use crate::view::ReturnPolicy;

use super::types::{ColorMode, MenuFile};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub path: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown key '{}' in {}:{}",
                self.path,
                self.file.display(),
                line
            ),
            None => write!(f, "unknown key '{}' in {}", self.path, self.file.display()),
        }
    }
}

/// Load a definition file and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(MenuFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse definition text; `path` is only used in messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MenuResult<(MenuFile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: MenuFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidDefinition {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                key,
                path: path_str,
                file: path.to_path_buf(),
            }
        })
        .collect();

    debug!(file = %path.display(), "loaded menu definition");
    Ok((file, warnings))
}

/// Apply environment variable overrides (MENU_TREE_* prefix)
pub fn with_env_overrides(file: MenuFile) -> MenuFile {
    with_env_overrides_from(file, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut file: MenuFile,
    get_env: impl Fn(&str) -> Option<String>,
) -> MenuFile {
    // MENU_TREE_COLOR
    if let Some(mode) = get_env("MENU_TREE_COLOR") {
        file.output.color = match mode.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // MENU_TREE_AFTER_ACTION
    if let Some(policy) = get_env("MENU_TREE_AFTER_ACTION") {
        file.output.after_action = match policy.to_lowercase().as_str() {
            "redisplay" => ReturnPolicy::Redisplay,
            _ => ReturnPolicy::Exit,
        };
    }

    file
}

/// First line that assigns `key`, 1-based
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content.lines().enumerate().find_map(|(i, line)| {
        let trimmed = line.trim_start();
        let rest = trimmed.strip_prefix(key)?;
        rest.trim_start().starts_with('=').then_some(i + 1)
    })
}
