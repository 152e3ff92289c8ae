//! Dashboard layout state management.
//!
//! This module encapsulates the layout choices that survive restarts:
//! the active tab, the page size chosen for each tab, and the height
//! share of the details panel.

use serde::{Deserialize, Serialize};

/// The dashboard tabs, one table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Vehicles,
    Shipments,
    Compliance,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Vehicles, Tab::Shipments, Tab::Compliance];

    /// Tab caption with its icon.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Vehicles => "🚚 Vehicles",
            Tab::Shipments => "📦 Shipments",
            Tab::Compliance => "📋 Compliance",
        }
    }

    /// Singular noun for messages ("vehicle", "shipment", ...).
    pub fn noun(self) -> &'static str {
        match self {
            Tab::Vehicles => "vehicle",
            Tab::Shipments => "shipment",
            Tab::Compliance => "compliance check",
        }
    }
}

/// Page size per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizes {
    pub vehicles: usize,
    pub shipments: usize,
    pub compliance: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            vehicles: 10,
            shipments: 20,
            compliance: 10,
        }
    }
}

impl PageSizes {
    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::Vehicles => self.vehicles,
            Tab::Shipments => self.shipments,
            Tab::Compliance => self.compliance,
        }
    }

    fn slot_mut(&mut self, tab: Tab) -> &mut usize {
        match tab {
            Tab::Vehicles => &mut self.vehicles,
            Tab::Shipments => &mut self.shipments,
            Tab::Compliance => &mut self.compliance,
        }
    }
}

/// State related to dashboard layout.
///
/// Responsibilities:
/// - Tracking the active tab
/// - Remembering the page size of every tab
/// - Sizing the details panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutState {
    /// Tab shown in the central panel
    active_tab: Tab,
    /// Page size chosen for each table
    page_sizes: PageSizes,
    /// Share of the window height given to the tables (0.0 to 1.0)
    split_ratio: f32,
}

const MIN_SPLIT_RATIO: f32 = 0.2;
const MAX_SPLIT_RATIO: f32 = 0.95;

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Vehicles,
            page_sizes: PageSizes::default(),
            split_ratio: 0.72,
        }
    }

    // ===== Layout Queries =====

    /// Returns the active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns the page size stored for `tab`.
    pub fn page_size(&self, tab: Tab) -> usize {
        self.page_sizes.get(tab)
    }

    pub fn page_sizes(&self) -> PageSizes {
        self.page_sizes
    }

    /// Returns the split ratio between tables and the details panel.
    pub fn split_ratio(&self) -> f32 {
        self.split_ratio
    }

    // ===== Layout Mutations =====

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Records a page size for `tab`; zero is stored as one.
    pub fn set_page_size(&mut self, tab: Tab, size: usize) {
        *self.page_sizes.slot_mut(tab) = size.max(1);
    }

    /// Derives the split ratio from the details panel's on-screen height.
    ///
    /// # Returns
    /// `true` if the stored ratio moved
    pub fn record_details_height(&mut self, details_height: f32, total_height: f32) -> bool {
        if total_height <= 0.0 || !total_height.is_finite() || !details_height.is_finite() {
            return false;
        }
        let ratio = (1.0 - details_height / total_height).clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO);
        if (ratio - self.split_ratio).abs() < 0.001 {
            return false;
        }
        self.split_ratio = ratio;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layout = LayoutState::new();
        assert_eq!(layout.active_tab(), Tab::Vehicles);
        assert_eq!(layout.page_size(Tab::Shipments), 20);
    }

    #[test]
    fn test_page_size_never_zero() {
        let mut layout = LayoutState::new();
        layout.set_page_size(Tab::Compliance, 0);
        assert_eq!(layout.page_size(Tab::Compliance), 1);
        assert_eq!(layout.page_size(Tab::Vehicles), 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let layout: LayoutState = serde_json::from_str(r#"{"active_tab":"Shipments"}"#).unwrap();
        assert_eq!(layout.active_tab(), Tab::Shipments);
        assert_eq!(layout.page_sizes(), PageSizes::default());
    }

    #[test]
    fn test_details_height_sets_split_ratio() {
        let mut layout = LayoutState::new();
        assert!(layout.record_details_height(200.0, 800.0));
        assert!((layout.split_ratio() - 0.75).abs() < 1e-6);

        // same height again is not a change
        assert!(!layout.record_details_height(200.0, 800.0));

        // dragged almost to the top: clamped
        assert!(layout.record_details_height(790.0, 800.0));
        assert!((layout.split_ratio() - 0.2).abs() < 1e-6);

        assert!(!layout.record_details_height(100.0, 0.0));
    }

    #[test]
    fn test_split_ratio_persists() {
        let mut layout = LayoutState::new();
        layout.record_details_height(400.0, 1000.0);
        let json = serde_json::to_string(&layout).unwrap();
        let restored: LayoutState = serde_json::from_str(&json).unwrap();
        assert!((restored.split_ratio() - 0.6).abs() < 1e-6);
    }
}
