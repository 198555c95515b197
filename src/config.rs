use crate::error::LocateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub controller: ControllerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// "auto" to follow the running OS, or "linux" / "freebsd"
    pub platform: String,
}

/// Executable names or absolute paths of the external tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub zpool:    String,
    pub smartctl: String,
    pub glabel:   String,
    pub storcli:  String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// storcli object queried for the drive inventory.
    /// The default covers every controller, enclosure and slot.
    pub inventory_target: String,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { platform: "auto".to_string() }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            zpool:    "zpool".to_string(),
            smartctl: "smartctl".to_string(),
            glabel:   "glabel".to_string(),
            storcli:  "storcli".to_string(),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { inventory_target: "/call/eall/sall".to_string() }
    }
}

// ── Load ──────────────────────────────────────────────────────────────

impl Config {
    /// Load from an explicit path, or from the per-user default location.
    ///
    /// A missing default file yields defaults. An explicit path that cannot be
    /// read, or any file that does not parse, is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, LocateError> {
        if let Some(path) = explicit {
            let text = fs::read_to_string(path).map_err(|e| LocateError::Config {
                path:   path.display().to_string(),
                reason: e.to_string(),
            })?;
            return Self::parse(&text, path);
        }

        let path = match Self::config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        };
        let text = fs::read_to_string(&path).map_err(|e| LocateError::Config {
            path:   path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&text, &path)
    }

    pub fn parse(text: &str, origin: &Path) -> Result<Self, LocateError> {
        toml::from_str(text).map_err(|e| LocateError::Config {
            path:   origin.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("poollight").join("poollight.toml"))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
