use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ivyscan_util::errors::ScanError;

/// File name of the optional per-project configuration.
pub const CONFIG_FILE: &str = "ivyscan.toml";

/// Configuration names whose members are runtime (non-dev) dependencies.
pub const RUNTIME_CONF_NAMES: [&str; 2] = ["default", "runtime"];

/// Project configuration loaded from `ivyscan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub classify: ClassifyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Dev/runtime classification settings from `[classify]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    #[serde(default = "default_runtime_confs", rename = "runtime-confs")]
    pub runtime_confs: Vec<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            runtime_confs: default_runtime_confs(),
        }
    }
}

fn default_runtime_confs() -> Vec<String> {
    RUNTIME_CONF_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Manifest output settings from `[output]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
        }
    }
}

fn default_output_file() -> PathBuf {
    Path::new("target").join("RegisterUsage.json")
}

impl ScanConfig {
    /// Load `ivyscan.toml` from `dir`, or return defaults if the file doesn't exist.
    pub fn load(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and parse a specific config file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ScanError::Config {
            message: format!("Failed to parse config: {e}"),
        })?;
        if config.classify.runtime_confs.iter().any(|c| c.trim().is_empty()) {
            return Err(ScanError::Config {
                message: "runtime-confs must not contain empty names".to_string(),
            }
            .into());
        }
        Ok(config)
    }
}
