use super::traits::ConfigSection;
use crate::error::{Result, StylusError};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenomeConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Base sequences to translate, each starting with ATG
    pub sequences: Vec<String>,
}

impl GenomeConfig {
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }
}

impl ConfigSection for GenomeConfig {
    fn section_name() -> &'static str {
        "genome"
    }

    fn validate(&self) -> Result<()> {
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(StylusError::Configuration(
                "Genome origin must be finite".to_string(),
            ));
        }
        for (i, sequence) in self.sequences.iter().enumerate() {
            if sequence.is_empty() {
                return Err(StylusError::Configuration(format!(
                    "Genome sequence {} is empty",
                    i + 1
                )));
            }
            if !sequence.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')) {
                return Err(StylusError::Configuration(format!(
                    "Genome sequence {} may only contain the bases A, C, G and T",
                    i + 1
                )));
            }
        }
        Ok(())
    }
}
