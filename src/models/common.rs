// Common types for the task list
// All fields use camelCase for consistency with the stored JSON and the frontend

use serde::{Deserialize, Deserializer, Serialize};

/// Task priority - stored as a lowercase string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn asStr(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// Unknown or malformed stored values load as the default priority
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Priority::parse).unwrap_or_default())
    }
}

/// Where addTask places a new task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum InsertOrder {
    #[default]
    NewestFirst,
    Append,
}

/// Priority filter for the derived view ("All" or a single priority)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Empty selection means "All", mirroring the filter dropdown
    pub fn fromSelection(value: &str) -> Self {
        Priority::parse(value).map(Self::Only).unwrap_or(Self::All)
    }

    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => *p == priority,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(Priority::Low) => "Low Priority",
            Self::Only(Priority::Medium) => "Medium Priority",
            Self::Only(Priority::High) => "High Priority",
        }
    }
}

impl From<Option<Priority>> for PriorityFilter {
    fn from(value: Option<Priority>) -> Self {
        value.map(Self::Only).unwrap_or(Self::All)
    }
}
