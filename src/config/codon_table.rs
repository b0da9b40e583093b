use super::traits::ConfigSection;
use crate::error::{Result, StylusError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodonTableConfig {
    /// Codon table document (JSON or TOML); the standard table when absent
    pub document: Option<PathBuf>,
    /// Table that genomes are re-encoded into; the source table when absent
    pub target: Option<PathBuf>,
    /// Seed for synonymous codon sampling; entropy when absent
    pub seed: Option<u64>,
}

impl ConfigSection for CodonTableConfig {
    fn section_name() -> &'static str {
        "codon_table"
    }

    fn validate(&self) -> Result<()> {
        for path in self.document.iter().chain(self.target.iter()) {
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("toml"))
                .unwrap_or(false);
            if !supported {
                return Err(StylusError::Configuration(format!(
                    "Codon table document {} must be a .json or .toml file",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
