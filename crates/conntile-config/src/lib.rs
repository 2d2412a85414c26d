pub mod connections;
pub mod general;
pub mod keybindings;
pub mod theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use connections::ConnectionEntry;
pub use general::{GeneralConfig, MIN_INTERVAL_MS};
pub use keybindings::{check_collisions, validate_keybindings, InvalidBinding, KeyCollision, KeybindingsConfig};
pub use theme::ThemeConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub connections: Vec<ConnectionEntry>,
}

pub const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded defaults must parse")
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self::default();

        let path = Self::default_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                    Ok(user) => config.merge(user),
                    Err(e) => eprintln!("Warning: invalid config at {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: could not read {}: {e}", path.display()),
            }
        }

        config
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let contents = std::fs::read_to_string(path)?;
        let user: AppConfig = toml::from_str(&contents)?;
        config.merge(user);
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("conntile").join("config.toml")
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, DEFAULT_CONFIG)?;
        Ok(path)
    }

    fn merge(&mut self, user: AppConfig) {
        self.general = user.general;
        self.theme = user.theme;
        self.connections = user.connections;
        self.keybindings.merge(user.keybindings);
    }
}

#[cfg(test)]
mod tests;
