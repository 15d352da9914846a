// Storage layer for the task list
// Key-value persistence of the whole task collection + markdown/YAML settings file

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskListError};
use crate::models::{Settings, SettingsOverride, Task};

// ============================================
// PATH HELPERS
// ============================================

/// Global config directory (~/.tasklist/)
pub fn globalConfigDir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(TaskListError::NoHomeDir)?;
    Ok(home.join(".tasklist"))
}

/// Global config file path
pub fn globalConfigPath() -> Result<PathBuf> {
    Ok(globalConfigDir()?.join("config.md"))
}

/// Default directory for the file-backed key-value store
pub fn defaultDataDir() -> Result<PathBuf> {
    Ok(globalConfigDir()?.join("data"))
}

// ============================================
// FRONTMATTER PARSING
// ============================================

/// Parse YAML frontmatter from markdown content
pub fn parseFrontmatter<T: serde::de::DeserializeOwned>(content: &str) -> Option<(T, String)> {
    let content = content.trim();
    let rest = content.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    let yaml = rest[..end].trim();
    let body = rest[end + 4..].trim().to_string();

    let frontmatter: T = serde_yaml::from_str(yaml).ok()?;
    Some((frontmatter, body))
}

/// Serialize frontmatter + body to markdown
pub fn toMarkdown<T: serde::Serialize>(frontmatter: &T, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(frontmatter)?;
    Ok(format!("---\n{}---\n\n{}", yaml, body))
}

// ============================================
// KEY-VALUE STORES
// ============================================

/// Local key-value storage holding serialized values (localStorage contract)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-process store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under ~/.tasklist/data
    pub fn openDefault() -> Result<Self> {
        Ok(Self::new(defaultDataDir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn pathFor(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.pathFor(key);
        if !path.exists() {
            tracing::debug!("[FileStore::get] No file for key '{}' at {:?}", key, path);
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        tracing::debug!("[FileStore::get] Read {} bytes from {:?}", content.len(), path);
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.pathFor(key);
        // Write to a sibling temp file then rename so readers never see a partial value
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!("[FileStore::set] Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

// ============================================
// TASK COLLECTION
// ============================================

/// Load the task collection; missing or unreadable data yields an empty collection
pub fn loadTasks<S: KeyValueStore>(store: &S, key: &str) -> Vec<Task> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("[loadTasks] No stored tasks under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("[loadTasks] Failed to read '{}': {}, starting empty", key, e);
            return Vec::new();
        }
    };

    let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("[loadTasks] Stored tasks under '{}' are not a JSON array: {}, starting empty", key, e);
            return Vec::new();
        }
    };

    // A malformed record is skipped so the rest of the collection survives the next save
    let total = records.len();
    let tasks: Vec<Task> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::warn!("[loadTasks] Skipping record {} under '{}': {}", index, key, e);
                None
            }
        })
        .collect();

    tracing::info!("[loadTasks] Loaded {} of {} tasks from '{}'", tasks.len(), total, key);
    tasks
}

/// Serialize and overwrite the whole collection
pub fn saveTasks<S: KeyValueStore>(store: &S, key: &str, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string(tasks)?;
    store.set(key, &json)?;
    tracing::debug!("[saveTasks] Persisted {} tasks under '{}'", tasks.len(), key);
    Ok(())
}

// ============================================
// SETTINGS
// ============================================

/// Load settings from a config.md file; a missing or malformed file yields defaults
pub fn loadSettingsFile(path: &Path) -> Settings {
    if !path.exists() {
        tracing::info!("[loadSettingsFile] {:?} does not exist, using defaults", path);
        return Settings::default();
    }

    let content = fs::read_to_string(path).unwrap_or_default();
    parseFrontmatter::<Settings>(&content)
        .map(|(settings, _)| settings.normalized())
        .unwrap_or_else(|| {
            tracing::warn!("[loadSettingsFile] Failed to parse frontmatter in {:?}, using defaults", path);
            Settings::default()
        })
}

/// Load an override file; missing or malformed yields an empty override
pub fn loadOverrideFile(path: &Path) -> SettingsOverride {
    if !path.exists() {
        return SettingsOverride::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|content| parseFrontmatter::<SettingsOverride>(&content).map(|(o, _)| o))
        .unwrap_or_default()
}

/// Global settings merged with an optional override file
pub fn loadSettings(globalPath: &Path, overridePath: Option<&Path>) -> Settings {
    let global = loadSettingsFile(globalPath);
    match overridePath {
        Some(p) => {
            let over = loadOverrideFile(p);
            tracing::debug!("[loadSettings] Applying override from {:?}", p);
            global.withOverride(&over)
        }
        None => global,
    }
}

pub fn saveSettings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toMarkdown(settings, "# Task list settings\n")?;
    fs::write(path, content)?;
    tracing::info!("[saveSettings] Saved settings to {:?}", path);
    Ok(())
}
