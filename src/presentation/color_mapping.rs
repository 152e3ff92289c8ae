//! Colour and text styling for table cells.
//!
//! This module provides functions for:
//! - Getting the current theme's colour palette
//! - Turning a column's style hint into styled text

use egui::{Color32, RichText};
use logiview::{ThemeColors, ThemeManager};

/// Returns the current theme's colour palette, or the dark palette for
/// unknown names.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    &theme_manager.theme_or_fallback(current_theme_name).colors
}

/// Styles plain cell text according to a column style hint.
///
/// Known hints are `mono`, `strong` and `dim`; anything else is plain text.
pub fn styled_cell_text(text: String, class: Option<&str>, colors: &ThemeColors) -> RichText {
    let rich = RichText::new(text);
    match class {
        Some("mono") => rich.monospace(),
        Some("strong") => rich.strong().color(colors.text_strong),
        Some("dim") => rich.color(colors.text_dim),
        _ => rich,
    }
}

/// Accent used for destructive actions.
pub fn destructive_color(colors: &ThemeColors) -> Color32 {
    colors.red
}
