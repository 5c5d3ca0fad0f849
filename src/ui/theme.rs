use crossterm::style::{Color, Stylize};

/// Design tokens for menu output.
///
/// All colors and icons used by the renderer come from this module.
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const TITLE: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
}

pub mod icons {
    pub const MENU: &str = "▼";
    pub const ACTION: &str = "↳";
    pub const CYCLE: &str = "⟳";
    pub const WARNING: &str = "⚠";
    pub const SUCCESS: &str = "✓";
}

pub mod icons_ascii {
    pub const MENU: &str = "[v]";
    pub const ACTION: &str = "[>]";
    pub const CYCLE: &str = "[~]";
    pub const WARNING: &str = "[WARN]";
    pub const SUCCESS: &str = "[OK]";
}

/// Emphasis applied to menu output. Plain text when `color` is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub color: bool,
    pub unicode: bool,
}

impl Theme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    /// No color, ASCII icons. Output is byte-for-byte predictable.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn title(&self, text: &str) -> String {
        if self.color {
            text.with(colors::TITLE).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn index_label(&self, text: &str) -> String {
        if self.color {
            text.with(colors::DIM).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.with(colors::ERROR).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.with(colors::WARNING).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn menu_icon(&self) -> &'static str {
        if self.unicode {
            icons::MENU
        } else {
            icons_ascii::MENU
        }
    }

    pub fn action_icon(&self) -> &'static str {
        if self.unicode {
            icons::ACTION
        } else {
            icons_ascii::ACTION
        }
    }

    pub fn cycle_icon(&self) -> &'static str {
        if self.unicode {
            icons::CYCLE
        } else {
            icons_ascii::CYCLE
        }
    }

    pub fn warning_icon(&self) -> &'static str {
        if self.unicode {
            icons::WARNING
        } else {
            icons_ascii::WARNING
        }
    }

    pub fn success_icon(&self) -> &'static str {
        if self.unicode {
            icons::SUCCESS
        } else {
            icons_ascii::SUCCESS
        }
    }
}
