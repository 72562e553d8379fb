use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
}

/// Tunable pipeline constants.
///
/// The band thresholds and the mid-band chance are tuning values, not
/// semantics: the three-band shape is fixed, the numbers are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Exact number of records every call returns.
    pub target_count: usize,
    /// Seeds up to this many chars get a 2-unit base.
    pub short_seed_max: usize,
    /// Seeds of at least this many chars get a 3-unit base.
    pub long_seed_min: usize,
    /// Chance of a 3rd unit for seeds between the two thresholds.
    pub third_unit_chance: f64,
    /// Sibling variants expanded from the base record.
    pub variation_count: usize,
    /// At most this many curated records are prepended.
    pub curated_prepend_max: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_count: 5,
            short_seed_max: 4,
            long_seed_min: 8,
            third_unit_chance: 0.5,
            variation_count: 3,
            curated_prepend_max: 2,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/mingzi/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::debug!(path = %config_path.display(), "loaded config");
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        path = %config_path.display(),
                        error = %e,
                        "failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("mingzi").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
