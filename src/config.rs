use crate::catalog::ToolDescriptor;
use crate::error::{Result, SequentialToolsError};
use crate::thinking::DEFAULT_MAX_HISTORY_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure loaded from sequential_tools.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    /// Externally supplied tool descriptors advertised in the tool catalog
    #[serde(default)]
    pub tools: Vec<ToolDescriptor>,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// System-level configuration for the thought ledger
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,
}

fn default_max_history_size() -> usize {
    DEFAULT_MAX_HISTORY_SIZE
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub mcp_no_log: bool,
    pub log_level: String,
    pub thought_logging: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mcp_no_log: false,
            log_level: "sequential_tools=info,rmcp=info".to_string(),
            thought_logging: true,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            mcp_no_log: std::env::var("MCP_NO_LOG")
                .ok()
                .is_some_and(|v| v == "true" || v == "1"),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "sequential_tools=info,rmcp=info".to_string()),
            thought_logging: std::env::var("DISABLE_THOUGHT_LOGGING")
                .ok()
                .is_none_or(|v| v != "true" && v != "1"),
        }
    }
}

impl Config {
    /// Load `.env` from SEQ_TOOLS_ENV_FILE if set, else ./.env. Variables
    /// already present in the process environment are left alone.
    pub fn load_env_file() {
        if let Ok(env_path) = std::env::var("SEQ_TOOLS_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }
    }

    /// Load configuration from TOML file and environment variables.
    ///
    /// An explicit `path` must be readable. Without one, SEQUENTIAL_TOOLS_CONFIG
    /// or "sequential_tools.toml" is tried and a missing file means defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::load_env_file();

        let mut config = match path {
            Some(explicit) => {
                let content = std::fs::read_to_string(explicit).map_err(|e| {
                    SequentialToolsError::Config {
                        message: format!("cannot read {}: {}", explicit.display(), e),
                    }
                })?;
                Self::from_toml_str(&content)?
            }
            None => {
                let default_path = PathBuf::from(
                    std::env::var("SEQUENTIAL_TOOLS_CONFIG")
                        .unwrap_or_else(|_| "sequential_tools.toml".to_string()),
                );
                match std::fs::read_to_string(&default_path) {
                    Ok(content) => Self::from_toml_str(&content)?,
                    Err(_) => {
                        tracing::warn!(
                            "Config file {} not found, using defaults",
                            default_path.display()
                        );
                        Self::default()
                    }
                }
            }
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Env-first override for the history ceiling. An unparsable value keeps
    /// the current one.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var("MAX_HISTORY_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(v) => {
                    self.system.max_history_size = v;
                    tracing::debug!("MAX_HISTORY_SIZE env override applied");
                }
                Err(_) => tracing::warn!(
                    "MAX_HISTORY_SIZE '{}' is not a positive integer, keeping {}",
                    raw,
                    self.system.max_history_size
                ),
            }
        }
    }

    /// Command-line overrides win over file and environment; re-validates.
    pub fn apply_cli_overrides(&mut self, max_history_size: Option<usize>) -> Result<()> {
        if let Some(max) = max_history_size {
            self.system.max_history_size = max;
        }
        self.validate()
    }

    /// Parse the TOML portion of the configuration (no env, no validation).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.system.max_history_size == 0 {
            return Err(SequentialToolsError::Config {
                message: "max_history_size must be at least 1".into(),
            });
        }
        if self.tools.iter().any(|tool| tool.name.trim().is_empty()) {
            return Err(SequentialToolsError::Config {
                message: "configured tool descriptors must have a non-empty name".into(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            tools: Vec::new(),
            runtime: RuntimeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_thousand() {
        let config = Config::default();
        assert_eq!(config.system.max_history_size, 1000);
        assert!(config.tools.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_system_and_tools() {
        let config = Config::from_toml_str(
            r#"
            [system]
            max_history_size = 25

            [[tools]]
            name = "read_file"
            description = "Read a file from disk"

            [tools.input_schema]
            type = "object"
            required = ["path"]

            [tools.input_schema.properties.path]
            type = "string"
            "#,
        )
        .unwrap();
        assert_eq!(config.system.max_history_size, 25);
        assert_eq!(config.tools.len(), 1);
        assert_eq!(config.tools[0].name, "read_file");
        assert_eq!(
            config.tools[0].input_schema["properties"]["path"]["type"],
            "string"
        );
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.system.max_history_size, DEFAULT_MAX_HISTORY_SIZE);
    }

    #[test]
    fn zero_history_is_invalid() {
        let mut config = Config::default();
        config.system.max_history_size = 0;
        assert!(matches!(
            config.validate(),
            Err(SequentialToolsError::Config { .. })
        ));
    }

    #[test]
    fn cli_override_replaces_and_revalidates() {
        let mut config = Config::default();
        config.apply_cli_overrides(Some(5)).unwrap();
        assert_eq!(config.system.max_history_size, 5);
        config.apply_cli_overrides(None).unwrap();
        assert_eq!(config.system.max_history_size, 5);
        assert!(config.apply_cli_overrides(Some(0)).is_err());
    }

    #[test]
    fn blank_tool_name_is_invalid() {
        let config = Config::from_toml_str("[[tools]]\nname = \"  \"").unwrap();
        assert!(config.validate().is_err());
    }
}
