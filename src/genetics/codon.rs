use crate::error::{Result, StylusError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const CODON_LENGTH: usize = 3;
pub const CODON_COUNT: usize = 64;
pub const START_CODON: &str = "ATG";

/// Bases in canonical digit order (T=0, C=1, A=2, G=3)
pub const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

/// Three bases over `{A,C,G,T}`, ordered by canonical index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; CODON_LENGTH]);

fn base_digit(base: u8) -> Option<usize> {
    BASES.iter().position(|&b| b == base)
}

impl Codon {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CODON_LENGTH || bytes.iter().any(|&b| base_digit(b).is_none()) {
            return Err(StylusError::MalformedCodon(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }
        Ok(Codon([bytes[0], bytes[1], bytes[2]]))
    }

    /// Codon at a canonical index (0 = `TTT`, 63 = `GGG`)
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CODON_COUNT {
            return None;
        }
        Some(Codon([
            BASES[index / 16],
            BASES[(index / 4) % 4],
            BASES[index % 4],
        ]))
    }

    /// Canonical table index, most significant base first
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .filter_map(|&b| base_digit(b))
            .fold(0, |acc, digit| acc * 4 + digit)
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bases are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    pub fn is_start(&self) -> bool {
        self.as_str() == START_CODON
    }

    /// All 64 codons in canonical order
    pub fn all() -> impl Iterator<Item = Codon> {
        (0..CODON_COUNT).filter_map(Codon::from_index)
    }
}

impl Ord for Codon {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for Codon {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Codon {
    type Err = StylusError;

    fn from_str(s: &str) -> Result<Self> {
        Codon::from_bytes(s.as_bytes())
    }
}

impl std::fmt::Display for Codon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Codon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Codon {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> std::result::Result<Self, De::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a codon string into its canonical table index
pub fn codon_to_index(codon: &str) -> Result<usize> {
    Ok(codon.parse::<Codon>()?.index())
}

/// Number of codons touched by `base_count` bases, counting a trailing partial codon
pub fn codon_count(base_count: usize) -> usize {
    (base_count + CODON_LENGTH - 1) / CODON_LENGTH
}

/// Index of the first base of the codon containing `base_index` (0-based)
pub fn codon_boundary(base_index: usize) -> usize {
    base_index - (base_index % CODON_LENGTH)
}

/// Index of the codon containing `base_index` (0-based)
pub fn codon_index(base_index: usize) -> usize {
    codon_boundary(base_index) / CODON_LENGTH
}
