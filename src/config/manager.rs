use super::{
    codon_table::CodonTableConfig,
    genome::GenomeConfig,
    han::HanConfig,
    traits::ConfigSection,
};
use crate::error::{Result, StylusError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables with this prefix override file settings,
/// e.g. `STYLUS_CODON_TABLE__SEED=7`
pub const ENV_PREFIX: &str = "STYLUS";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StylusConfig {
    pub codon_table: CodonTableConfig,
    pub genome: GenomeConfig,
    pub han: HanConfig,
}

impl StylusConfig {
    pub fn validate(&self) -> Result<()> {
        self.codon_table.validate()?;
        self.genome.validate()?;
        self.han.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: StylusConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `path` (format by extension), then apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| StylusError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: StylusConfig = settings
            .try_deserialize()
            .map_err(|e| StylusError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| StylusError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| StylusError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &StylusConfig {
        &self.config
    }

    /// Apply `f` and keep the result only if it still validates
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut StylusConfig),
    {
        let mut config = self.config.clone();
        f(&mut config);
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
