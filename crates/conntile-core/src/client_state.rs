use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConnectionsError;

/// A piece of UI state that survives restarts.
///
/// The store calls [`StateValue::on_init`] once with whatever was persisted,
/// then polls [`StateValue::has_changed`] on its own cadence and writes
/// [`StateValue::get_value`] whenever it reports a change.
pub trait StateValue {
    fn module(&self) -> &str;
    fn key(&self) -> &str;
    fn on_init(&mut self, value: Option<Value>);
    fn get_value(&self) -> Option<Value>;
    /// Must resync the implementor's shadow copy, so a single mutation is
    /// reported once.
    fn has_changed(&mut self) -> bool;
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StateFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<String>,
    #[serde(default)]
    modules: BTreeMap<String, BTreeMap<String, Value>>,
}

/// Session-scoped persisted settings, grouped by module name.
#[derive(Debug, Default)]
pub struct ClientState {
    modules: BTreeMap<String, BTreeMap<String, Value>>,
    path: Option<PathBuf>,
    // Set while a detected change has not reached disk yet.
    dirty: bool,
}

impl ClientState {
    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store at `path`. A missing or unreadable file starts empty.
    pub fn load(path: &Path) -> Self {
        let modules = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<StateFile>(&raw) {
                Ok(file) => file.modules,
                Err(e) => {
                    tracing::warn!("Discarding malformed client state at {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Could not read client state at {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { modules, path: Some(path.to_path_buf()), dirty: false }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("conntile").join("client-state.json")
    }

    pub fn get(&self, module: &str, key: &str) -> Option<&Value> {
        self.modules.get(module).and_then(|m| m.get(key))
    }

    /// `None` removes the key; a module left empty is dropped.
    pub fn set(&mut self, module: &str, key: &str, value: Option<Value>) {
        match value {
            Some(v) => {
                self.modules.entry(module.to_string()).or_default().insert(key.to_string(), v);
            }
            None => {
                if let Some(m) = self.modules.get_mut(module) {
                    m.remove(key);
                    if m.is_empty() {
                        self.modules.remove(module);
                    }
                }
            }
        }
    }

    pub fn init_value(&self, value: &mut dyn StateValue) {
        let stored = self.get(value.module(), value.key()).cloned();
        value.on_init(stored);
    }

    /// Persists `value` if it reports a change. A failed write is retried on
    /// the next call. Returns whether anything was written.
    pub fn sync(&mut self, value: &mut dyn StateValue) -> Result<bool, ConnectionsError> {
        if value.has_changed() {
            let module = value.module().to_string();
            let key = value.key().to_string();
            self.set(&module, &key, value.get_value());
            tracing::debug!("Client state {module}.{key} changed");
            self.dirty = true;
        }
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        self.dirty = false;
        Ok(true)
    }

    pub fn save(&self) -> Result<(), ConnectionsError> {
        let Some(path) = &self.path else { return Ok(()) };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = StateFile { saved_at: Some(jiff::Timestamp::now().to_string()), modules: self.modules.clone() };
        let data = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
