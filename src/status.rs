//! Status badge resolution.
//!
//! A table may designate one field as its status field and supply a map from
//! raw status values to display metadata. Resolution never fails: unknown
//! values and unknown colour names both land on gray.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display metadata for one raw status value.
///
/// `color` is a palette name; anything outside the palette renders gray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    pub color: String,
    pub label: String,
}

impl StatusConfig {
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
        }
    }
}

/// The closed badge palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusColor {
    Green,
    Red,
    Blue,
    Amber,
    Purple,
    #[default]
    Gray,
}

impl StatusColor {
    pub const ALL: [StatusColor; 6] = [
        StatusColor::Green,
        StatusColor::Red,
        StatusColor::Blue,
        StatusColor::Amber,
        StatusColor::Purple,
        StatusColor::Gray,
    ];

    /// Maps a palette name to a colour, falling back to gray.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "green" => StatusColor::Green,
            "red" => StatusColor::Red,
            "blue" => StatusColor::Blue,
            "amber" => StatusColor::Amber,
            "purple" => StatusColor::Purple,
            _ => StatusColor::Gray,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Red => "red",
            StatusColor::Blue => "blue",
            StatusColor::Amber => "amber",
            StatusColor::Purple => "purple",
            StatusColor::Gray => "gray",
        }
    }
}

/// A resolved badge, ready to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub color: StatusColor,
    pub label: String,
}

/// Resolves a raw status value against a status map.
///
/// # Arguments
/// * `raw` - The raw status value read from the row
/// * `status_map` - Known statuses and their display metadata
///
/// # Returns
/// The configured badge, or a gray badge labelled with the raw value
pub fn resolve_status(raw: &str, status_map: &HashMap<String, StatusConfig>) -> StatusBadge {
    match status_map.get(raw) {
        Some(config) => StatusBadge {
            color: StatusColor::from_name(&config.color),
            label: config.label.clone(),
        },
        None => StatusBadge {
            color: StatusColor::Gray,
            label: raw.to_string(),
        },
    }
}
