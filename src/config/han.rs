use super::traits::ConfigSection;
use crate::error::{Result, StylusError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HanConfig {
    /// HCF files to parse
    pub sources: Vec<PathBuf>,
}

impl ConfigSection for HanConfig {
    fn section_name() -> &'static str {
        "han"
    }

    fn validate(&self) -> Result<()> {
        if self.sources.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(StylusError::Configuration(
                "HCF source paths may not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
