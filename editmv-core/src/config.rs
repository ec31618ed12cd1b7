use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Editor command for the texteditor command. When unset, `$VISUAL` and
    /// `$EDITOR` are consulted before falling back to `vi`.
    #[serde(default)]
    pub editor: Option<String>,

    /// How edit-file paths are translated before being handed to the editor.
    #[serde(default)]
    pub path_mapping: PathMapping,

    /// WSL distribution name used by the `wsl` path mapping.
    #[serde(default = "default_distro")]
    pub wsl_distro: String,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Strategy for rewriting the edit-file path for the editor process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathMapping {
    /// Hand the path over unchanged.
    #[default]
    None,
    /// Translate WSL paths so a Windows editor can open them: `/mnt/<drive>/...`
    /// becomes `<DRIVE>:/...`, anything else goes through `//wsl.localhost/<distro>`.
    Wsl,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: None,
            path_mapping: PathMapping::None,
            wsl_distro: default_distro(),
            defaults: DefaultsConfig::default(),
        }
    }
}

fn default_distro() -> String {
    "Ubuntu".to_string()
}

impl Config {
    /// Load config from `<config dir>/editmv/config.toml` if it exists.
    pub fn load() -> Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("editmv").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        // Return default config if no config file exists
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
