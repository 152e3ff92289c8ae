//! Settings persistence.
//!
//! Settings are stored in eframe's key/value storage as JSON strings, so any
//! serde type can be persisted under a key. Unreadable or outdated values are
//! treated as missing.

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// Storage key of the persisted `LayoutState`.
pub const LAYOUT_KEY: &str = "dashboard_layout";

/// Loads and saves serde settings through `eframe::Storage`.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Attempts to load a setting.
    ///
    /// # Returns
    /// `Some(value)` if the key exists and parses, `None` otherwise
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "ignoring unreadable setting");
                None
            }
        }
    }

    /// Loads a setting, falling back to `default`.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Saves a setting as JSON.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LayoutState, Tab};
    use eframe::Storage as _;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_layout_round_trip() {
        let mut storage = MockStorage::default();
        let mut layout = LayoutState::new();
        layout.set_active_tab(Tab::Compliance);
        layout.set_page_size(Tab::Shipments, 50);

        SettingsCoordinator::save_setting(&mut storage, LAYOUT_KEY, &layout);
        let loaded: LayoutState =
            SettingsCoordinator::load_setting_or(Some(&storage), LAYOUT_KEY, LayoutState::new());
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_missing_and_corrupt_values_fall_back() {
        let mut storage = MockStorage::default();
        let missing: Option<LayoutState> = SettingsCoordinator::try_load_setting(Some(&storage), LAYOUT_KEY);
        assert!(missing.is_none());

        storage.set_string(LAYOUT_KEY, "{not json".to_string());
        let loaded = SettingsCoordinator::load_setting_or(Some(&storage), LAYOUT_KEY, LayoutState::new());
        assert_eq!(loaded, LayoutState::new());

        let no_storage: Option<i32> = SettingsCoordinator::try_load_setting(None, "anything");
        assert_eq!(no_storage, None);
    }
}
