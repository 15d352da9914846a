// Configuration models for the task list
// Global config and per-installation overrides

use serde::{Deserialize, Serialize};
use super::common::{InsertOrder, Priority};

/// All settings (stored in config.md frontmatter, can be overridden)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storageKey: String,
    pub pageSize: usize,
    pub insertOrder: InsertOrder,
    pub defaultPriority: Priority,
    pub notificationsEnabled: bool,
    pub pagerCountsFiltered: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storageKey: "tasks".to_string(),
            pageSize: 5,
            insertOrder: InsertOrder::NewestFirst,
            defaultPriority: Priority::Low,
            notificationsEnabled: true,
            pagerCountsFiltered: false,
        }
    }
}

/// Partial settings for overrides (all fields optional)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storageKey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pageSize: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertOrder: Option<InsertOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaultPriority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notificationsEnabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerCountsFiltered: Option<bool>,
}

impl Settings {
    /// Merge with override
    pub fn withOverride(&self, over: &SettingsOverride) -> Self {
        Self {
            storageKey: over.storageKey.clone().unwrap_or_else(|| self.storageKey.clone()),
            pageSize: over.pageSize.unwrap_or(self.pageSize),
            insertOrder: over.insertOrder.unwrap_or(self.insertOrder),
            defaultPriority: over.defaultPriority.unwrap_or(self.defaultPriority),
            notificationsEnabled: over.notificationsEnabled.unwrap_or(self.notificationsEnabled),
            pagerCountsFiltered: over.pagerCountsFiltered.unwrap_or(self.pagerCountsFiltered),
        }
        .normalized()
    }

    /// Page size of zero would make every page empty
    pub fn normalized(mut self) -> Self {
        self.pageSize = self.pageSize.max(1);
        if self.storageKey.trim().is_empty() {
            self.storageKey = Settings::default().storageKey;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_override() {
        let base = Settings::default();
        let over = SettingsOverride {
            pageSize: Some(10),
            insertOrder: Some(InsertOrder::Append),
            ..Default::default()
        };
        let merged = base.withOverride(&over);
        assert_eq!(merged.pageSize, 10);
        assert_eq!(merged.insertOrder, InsertOrder::Append);
        assert_eq!(merged.storageKey, "tasks");
        assert!(merged.notificationsEnabled);
    }

    #[test]
    fn test_normalized_clamps_page_size() {
        let over = SettingsOverride {
            pageSize: Some(0),
            storageKey: Some("  ".to_string()),
            ..Default::default()
        };
        let merged = Settings::default().withOverride(&over);
        assert_eq!(merged.pageSize, 1);
        assert_eq!(merged.storageKey, "tasks");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("pageSize: 3\ninsertOrder: append\n").unwrap();
        assert_eq!(settings.pageSize, 3);
        assert_eq!(settings.insertOrder, InsertOrder::Append);
        assert_eq!(settings.defaultPriority, Priority::Low);
    }
}
