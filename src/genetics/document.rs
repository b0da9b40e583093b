use super::codon_table::CodonTable;
use crate::error::{Result, StylusError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One codon assignment as written in a table document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodonEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<String>,
    /// Informational; recomputed on save and ignored on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_standard_mapping: Option<bool>,
}

/// Serialized form of a codon table: provenance plus the 64 assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodonTableDocument {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_parameters: Option<String>,
    #[serde(default)]
    pub entries: Vec<CodonEntry>,
}

impl CodonTableDocument {
    /// Read a document, choosing TOML or JSON by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            toml::from_str(&content).map_err(|e| {
                StylusError::InvalidTable(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let content = if is_toml {
            toml::to_string_pretty(self).map_err(|e| {
                StylusError::InvalidTable(format!("Failed to serialize table: {}", e))
            })?
        } else {
            serde_json::to_string_pretty(self)?
        };

        fs::write(path, content)?;
        Ok(())
    }
}

impl CodonTable {
    /// Build a table by applying each document entry to the standard table
    pub fn from_document(document: &CodonTableDocument) -> Result<Self> {
        let mut table = CodonTable::standard();

        for (i, entry) in document.entries.iter().enumerate() {
            let (codon, vector) = match (&entry.codon, &entry.vector) {
                (Some(codon), Some(vector)) => (codon, vector),
                _ => {
                    return Err(StylusError::InvalidTable(format!(
                        "Entry {} is missing a codon or vector",
                        i + 1
                    )))
                }
            };
            table.remap(codon.trim(), vector.trim())?;
        }

        table.uuid = document.uuid.trim().to_uppercase();
        table.author = document.author.clone();
        table.creation_date = document.creation_date;
        table.creation_tool = document.creation_tool.clone();
        table.creation_parameters = document.creation_parameters.clone();

        table.validate()?;
        log::debug!(
            "Built codon table {} from {} entries",
            table.uuid,
            document.entries.len()
        );
        Ok(table)
    }

    pub fn to_document(&self) -> CodonTableDocument {
        CodonTableDocument {
            uuid: self.uuid.clone(),
            author: self.author.clone(),
            creation_date: self.creation_date,
            creation_tool: self.creation_tool.clone(),
            creation_parameters: self.creation_parameters.clone(),
            entries: self
                .entries()
                .into_iter()
                .map(|(codon, vector)| CodonEntry {
                    codon: Some(codon.to_string()),
                    vector: Some(vector.to_string()),
                    has_standard_mapping: self.is_standard_codon(codon.as_str()).ok(),
                })
                .collect(),
        }
    }
}

impl Default for CodonTableDocument {
    fn default() -> Self {
        CodonTable::standard().to_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::codon_table::{is_standard_uuid, STANDARD_UUID};
    use crate::genetics::vector::Vector;

    #[test]
    fn test_standard_document_round_trips() {
        let document = CodonTable::standard().to_document();
        assert_eq!(document.entries.len(), 64);
        assert_eq!(document.entries[35].codon.as_deref(), Some("ATG"));
        assert_eq!(document.entries[35].vector.as_deref(), Some("Nem"));

        let table = CodonTable::from_document(&document).unwrap();
        assert_eq!(table, CodonTable::standard());
        assert!(table.is_standard());
    }

    #[test]
    fn test_uuid_is_stored_uppercase() {
        let mut document = CodonTableDocument::default();
        document.uuid = STANDARD_UUID.to_lowercase();
        let table = CodonTable::from_document(&document).unwrap();
        assert_eq!(table.uuid, STANDARD_UUID);
        assert!(is_standard_uuid(&document.uuid));
    }

    #[test]
    fn test_document_remaps_and_keeps_provenance() {
        let json = r#"{
            "uuid": "0e4b2f2c-1111-4222-8333-944455556666",
            "author": "lab",
            "creation_date": "2024-03-01T12:00:00Z",
            "creation_tool": "stylus",
            "entries": [
                {"codon": "CTT", "vector": "Eal"},
                {"codon": "TTT", "vector": "Nos"}
            ]
        }"#;
        let document: CodonTableDocument = serde_json::from_str(json).unwrap();
        let table = CodonTable::from_document(&document).unwrap();

        assert_eq!(table.vector_id("CTT").unwrap(), Vector::EastLong);
        assert_eq!(table.vector_id("TTT").unwrap(), Vector::NorthShort);
        assert_eq!(table.author.as_deref(), Some("lab"));
        assert_eq!(table.creation_tool.as_deref(), Some("stylus"));
        assert!(table.creation_date.is_some());
        assert!(table.creation_parameters.is_none());
        assert!(!table.is_standard());
        assert!(table.differs_from_standard());
    }

    #[test]
    fn test_entries_flag_standard_mappings() {
        let mut table = CodonTable::standard();
        table.remap("CTT", "Eal").unwrap();
        let document = table.to_document();

        let ctt = &document.entries[16];
        assert_eq!(ctt.codon.as_deref(), Some("CTT"));
        assert_eq!(ctt.has_standard_mapping, Some(false));
        assert!(document
            .entries
            .iter()
            .filter(|e| e.codon.as_deref() != Some("CTT"))
            .all(|e| e.has_standard_mapping == Some(true)));

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["entries"][16]["has_standard_mapping"], false);
    }

    #[test]
    fn test_created_table_keeps_its_stamp_through_a_document() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut table = CodonTable::create("stylus", &mut StdRng::seed_from_u64(8));
        table.remap("GGA", "Nom").unwrap();

        let json = serde_json::to_string(&table.to_document()).unwrap();
        let document: CodonTableDocument = serde_json::from_str(&json).unwrap();
        let loaded = CodonTable::from_document(&document).unwrap();

        assert_eq!(loaded.uuid, table.uuid);
        assert_eq!(loaded.creation_date, table.creation_date);
        assert_eq!(loaded.creation_tool.as_deref(), Some("stylus"));
        assert_eq!(loaded.entries(), table.entries());
    }

    #[test]
    fn test_incomplete_entry_is_rejected() {
        let json = r#"{"uuid": "x", "entries": [{"codon": "CTT"}]}"#;
        let document: CodonTableDocument = serde_json::from_str(json).unwrap();
        assert!(matches!(
            CodonTable::from_document(&document),
            Err(StylusError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_document_that_empties_a_bucket_fails_validation() {
        let mut document = CodonTableDocument::default();
        document.entries = ["ACT", "ACC"]
            .iter()
            .map(|c| CodonEntry {
                codon: Some(c.to_string()),
                vector: Some("Nos".to_string()),
                has_standard_mapping: None,
            })
            .collect();

        assert!(matches!(
            CodonTable::from_document(&document),
            Err(StylusError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_unknown_vector_in_document() {
        let mut document = CodonTableDocument::default();
        document.entries[0].vector = Some("Up".to_string());
        assert!(matches!(
            CodonTable::from_document(&document),
            Err(StylusError::UnknownVector(_))
        ));
    }
}
