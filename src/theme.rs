//! Theme support for the logiview dashboard.
//!
//! Provides the built-in colour schemes (Light, Dark, Dracula), a small theme
//! manager, and the light/dark colour pairs used for status badges.
//!
//! # Examples
//!
//! ```
//! use logiview::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! assert!(dark.dark_mode);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::status::StatusColor;

/// Colour palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interaction
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic accents
    pub red: Color32,
    pub amber: Color32,
    pub blue: Color32,
}

/// A theme definition with metadata and palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    /// Selects the dark variant of badge colours and egui's dark visuals
    pub dark_mode: bool,
    pub colors: ThemeColors,
}

/// Foreground/background pair for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub text: Color32,
    pub fill: Color32,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the dark theme
    pub fn theme_or_fallback(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns all available theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colours to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.blue;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.blue;
        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.amber;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Badge colours for a palette entry.
///
/// Light mode uses a pale fill with dark text, dark mode a deep fill with
/// light text. The pairs are fixed so badges read the same in every theme.
pub fn badge_colors(color: StatusColor, dark_mode: bool) -> BadgeColors {
    let (light, dark) = match color {
        StatusColor::Green => (("#166534", "#dcfce7"), ("#86efac", "#14532d")),
        StatusColor::Red => (("#991b1b", "#fee2e2"), ("#fca5a5", "#7f1d1d")),
        StatusColor::Blue => (("#1e40af", "#dbeafe"), ("#93c5fd", "#1e3a8a")),
        StatusColor::Amber => (("#92400e", "#fef3c7"), ("#fcd34d", "#78350f")),
        StatusColor::Purple => (("#6b21a8", "#f3e8ff"), ("#d8b4fe", "#581c87")),
        StatusColor::Gray => (("#374151", "#f3f4f6"), ("#d1d5db", "#374151")),
    };
    let (text, fill) = if dark_mode { dark } else { light };
    BadgeColors {
        text: hex_to_color32(text),
        fill: hex_to_color32(fill),
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme for daytime operations".to_string(),
        dark_mode: false,
        colors: ThemeColors {
            panel_background: hex_to_color32("#f8fafc"),
            extreme_background: hex_to_color32("#ffffff"),

            text: hex_to_color32("#0f172a"),
            text_dim: hex_to_color32("#64748b"),
            text_strong: hex_to_color32("#020617"),

            selection: hex_to_color32("#bfdbfe"),
            hover: hex_to_color32("#e2e8f0"),
            border: hex_to_color32("#cbd5e1"),

            red: hex_to_color32("#dc2626"),
            amber: hex_to_color32("#d97706"),
            blue: hex_to_color32("#2563eb"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme for control-room screens".to_string(),
        dark_mode: true,
        colors: ThemeColors {
            panel_background: hex_to_color32("#111827"),
            extreme_background: hex_to_color32("#030712"),

            text: hex_to_color32("#e5e7eb"),
            text_dim: hex_to_color32("#9ca3af"),
            text_strong: hex_to_color32("#f9fafb"),

            selection: hex_to_color32("#1e3a8a"),
            hover: hex_to_color32("#1f2937"),
            border: hex_to_color32("#374151"),

            red: hex_to_color32("#f87171"),
            amber: hex_to_color32("#fbbf24"),
            blue: hex_to_color32("#60a5fa"),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula colour palette".to_string(),
        dark_mode: true,
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            red: hex_to_color32("#ff5555"),
            amber: hex_to_color32("#ffb86c"),
            blue: hex_to_color32("#8be9fd"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}
