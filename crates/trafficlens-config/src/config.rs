// trafficlens-config/src/config.rs
// ============================================================================
// Module: Traffic Lens Configuration
// Description: Configuration loading and validation for the toolbar host.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: trafficlens-toolbar, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. Unknown
//! keys, oversized files, and out-of-range values fail closed: the host
//! refuses to start with a config it does not fully understand. The engine
//! core never reads configuration directly; it receives the derived
//! [`FeatureGates`] value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use trafficlens_toolbar::FeatureGates;
use trafficlens_toolbar::hosts_shape_valid;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "trafficlens.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "TRAFFICLENS_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Default port exposed by a newly created gateway.
const DEFAULT_GATEWAY_PORT: u16 = 80;
/// Default host list for a newly created gateway.
const DEFAULT_GATEWAY_HOSTS: &str = "*";
/// Default maximum number of hosts accepted by the gateway wizard.
const DEFAULT_WIZARD_MAX_HOSTS: usize = 16;
/// Maximum allowed value for the wizard host limit.
const MAX_WIZARD_MAX_HOSTS: usize = 256;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Traffic Lens host configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolbarConfig {
    /// Server feature gates.
    #[serde(default)]
    pub features: FeaturesConfig,
    /// Gateway wizard defaults and limits.
    #[serde(default)]
    pub wizard: WizardConfig,
}

/// Server feature gates controlling the offered toolbar menu.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesConfig {
    /// Ambient mesh support; offers the waypoint-proxy setting when true.
    #[serde(default)]
    pub ambient_enabled: bool,
}

/// Gateway wizard defaults and limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    /// Default port for a newly created gateway.
    #[serde(default = "default_gateway_port")]
    pub default_gateway_port: u16,
    /// Default host list for a newly created gateway.
    #[serde(default = "default_gateway_hosts")]
    pub default_gateway_hosts: String,
    /// Maximum number of comma-separated hosts accepted by the wizard.
    #[serde(default = "default_wizard_max_hosts")]
    pub max_hosts: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_gateway_port: DEFAULT_GATEWAY_PORT,
            default_gateway_hosts: DEFAULT_GATEWAY_HOSTS.to_string(),
            max_hosts: DEFAULT_WIZARD_MAX_HOSTS,
        }
    }
}

/// Serde default for the wizard gateway port.
const fn default_gateway_port() -> u16 {
    DEFAULT_GATEWAY_PORT
}

/// Serde default for the wizard gateway hosts.
fn default_gateway_hosts() -> String {
    DEFAULT_GATEWAY_HOSTS.to_string()
}

/// Serde default for the wizard host limit.
const fn default_wizard_max_hosts() -> usize {
    DEFAULT_WIZARD_MAX_HOSTS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl ToolbarConfig {
    /// Loads configuration from the default path or the env override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var(CONFIG_ENV_VAR)
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_NAME), PathBuf::from);
        Self::load_from_path(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the
    /// size limit, fails to parse, or fails validation.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE as u64 {
            return Err(ConfigError::Invalid(format!(
                "config file too large: {} bytes (max {MAX_CONFIG_FILE_SIZE})",
                metadata.len()
            )));
        }
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        let config: Self =
            toml::from_str(&text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration against hard limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on any out-of-range or malformed
    /// value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wizard.default_gateway_port == 0 {
            return Err(ConfigError::Invalid(
                "wizard default gateway port must be non-zero".to_string(),
            ));
        }
        if self.wizard.max_hosts == 0 || self.wizard.max_hosts > MAX_WIZARD_MAX_HOSTS {
            return Err(ConfigError::Invalid(format!(
                "wizard max hosts must be between 1 and {MAX_WIZARD_MAX_HOSTS}"
            )));
        }
        if !hosts_shape_valid(&self.wizard.default_gateway_hosts) {
            return Err(ConfigError::Invalid(
                "wizard default gateway hosts must be a wildcard or fully qualified".to_string(),
            ));
        }
        let host_count = self.wizard.default_gateway_hosts.split(',').count();
        if host_count > self.wizard.max_hosts {
            return Err(ConfigError::Invalid(
                "wizard default gateway hosts exceed the host limit".to_string(),
            ));
        }
        Ok(())
    }

    /// Derives the engine feature gates from this configuration.
    #[must_use]
    pub const fn feature_gates(&self) -> FeatureGates {
        FeatureGates {
            ambient_enabled: self.features.ambient_enabled,
        }
    }
}
