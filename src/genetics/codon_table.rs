use super::codon::{Codon, CODON_COUNT};
use super::vector::{Vector, VECTOR_COUNT};
use crate::error::{Result, StylusError};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Identifier carried by the canonical table
pub const STANDARD_UUID: &str = "9CF8BD5B-860C-4D7D-AED6-270C6EC14790";

/// True when `uuid` names the canonical table
pub fn is_standard_uuid(uuid: &str) -> bool {
    uuid.trim().eq_ignore_ascii_case(STANDARD_UUID)
}

// Version 4 layout, uppercase like the canonical identifier
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    for byte in bytes.iter_mut() {
        *byte = rng.gen_range(0..=u8::MAX);
    }
    bytes[6] = (bytes[6] & 0x0F) | 0x40;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

use Vector::*;

/// Canonical codon assignment, indexed by canonical codon index
const STANDARD_MAP: [Vector; CODON_COUNT] = [
    NorthLong, NorthLong, NorthMedium, NorthMedium, // TTT TTC TTA TTG
    SoutheastMedium, SoutheastMedium, SoutheastMedium, SoutheastMedium, // TCT TCC TCA TCG
    SouthLong, SouthLong, Stop, Stop, // TAT TAC TAA TAG
    NorthwestMedium, NorthwestMedium, Stop, NorthwestMedium, // TGT TGC TGA TGG
    NorthShort, NorthShort, NorthShort, NorthShort, // CTT CTC CTA CTG
    SoutheastShort, SoutheastShort, SoutheastShort, SoutheastShort, // CCT CCC CCA CCG
    SouthMedium, SouthMedium, SouthShort, SouthShort, // CAT CAC CAA CAG
    NorthwestShort, NorthwestShort, NorthwestShort, NorthwestShort, // CGT CGC CGA CGG
    NortheastMedium, NortheastMedium, NortheastMedium, NortheastMedium, // ATT ATC ATA ATG
    EastLong, EastLong, EastMedium, EastMedium, // ACT ACC ACA ACG
    SouthwestMedium, SouthwestMedium, SouthwestMedium, SouthwestMedium, // AAT AAC AAA AAG
    WestLong, WestLong, WestMedium, WestMedium, // AGT AGC AGA AGG
    NortheastShort, NortheastShort, NortheastShort, NortheastShort, // GTT GTC GTA GTG
    EastShort, EastShort, EastShort, EastShort, // GCT GCC GCA GCG
    SouthwestShort, SouthwestShort, SouthwestShort, SouthwestShort, // GAT GAC GAA GAG
    WestShort, WestShort, WestShort, WestShort, // GGT GGC GGA GGG
];

/// Bidirectional codon/vector map with provenance
///
/// `codon_to_vector` and `vector_to_codons` are kept as mutual inverses:
/// the only mutation is [`CodonTable::remap`], which moves a codon out of
/// its current bucket and appends it to the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonTable {
    pub uuid: String,
    pub author: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub creation_tool: Option<String>,
    pub creation_parameters: Option<String>,
    codon_to_vector: [Vector; CODON_COUNT],
    vector_to_codons: Vec<Vec<Codon>>,
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable {
    /// The canonical table
    pub fn standard() -> Self {
        let mut vector_to_codons = vec![Vec::new(); VECTOR_COUNT];
        for codon in Codon::all() {
            vector_to_codons[STANDARD_MAP[codon.index()].id()].push(codon);
        }

        Self {
            uuid: STANDARD_UUID.to_string(),
            author: None,
            creation_date: None,
            creation_tool: None,
            creation_parameters: None,
            codon_to_vector: STANDARD_MAP,
            vector_to_codons,
        }
    }

    /// A new table with the canonical assignment, a fresh identifier and a
    /// creation stamp, ready to be remapped and saved
    pub fn create<R: Rng + ?Sized>(creation_tool: &str, rng: &mut R) -> Self {
        let mut table = Self::standard();
        table.uuid = random_uuid(rng);
        table.creation_date = Some(Utc::now());
        table.creation_tool = Some(creation_tool.to_string());

        log::debug!("Created codon table {} with {}", table.uuid, creation_tool);
        table
    }

    /// Table-level check: the identifier is the canonical one
    pub fn is_standard(&self) -> bool {
        is_standard_uuid(&self.uuid)
    }

    /// True if the current assignment of `codon` matches the canonical table
    pub fn is_standard_codon(&self, codon: &str) -> Result<bool> {
        let codon: Codon = codon.parse()?;
        Ok(self.codon_to_vector[codon.index()] == STANDARD_MAP[codon.index()])
    }

    /// True if any codon deviates from the canonical assignment
    pub fn differs_from_standard(&self) -> bool {
        self.codon_to_vector != STANDARD_MAP
    }

    /// Reassign `codon` to the vector named `vector_name`
    pub fn remap(&mut self, codon: &str, vector_name: &str) -> Result<()> {
        let vector = Vector::from_name(vector_name)
            .ok_or_else(|| StylusError::UnknownVector(vector_name.to_string()))?;
        let codon: Codon = codon
            .parse()
            .map_err(|_| StylusError::UnknownCodon(codon.to_string()))?;

        self.assign(codon, vector);
        Ok(())
    }

    /// Typed form of [`CodonTable::remap`]
    pub fn assign(&mut self, codon: Codon, vector: Vector) {
        let index = codon.index();
        let previous = self.codon_to_vector[index];
        if previous == vector {
            return;
        }

        self.vector_to_codons[previous.id()].retain(|c| *c != codon);
        self.vector_to_codons[vector.id()].push(codon);
        self.codon_to_vector[index] = vector;

        log::debug!("Remapped codon {} from {} to {}", codon, previous, vector);
    }

    /// All 64 (codon, vector name) pairs in canonical codon order
    pub fn entries(&self) -> Vec<(Codon, &'static str)> {
        Codon::all()
            .map(|codon| (codon, self.codon_to_vector[codon.index()].name()))
            .collect()
    }

    pub fn vector_id(&self, codon: &str) -> Result<Vector> {
        let codon: Codon = codon.parse()?;
        Ok(self.vector_for(codon))
    }

    pub fn vector_name(&self, codon: &str) -> Result<&'static str> {
        Ok(self.vector_id(codon)?.name())
    }

    pub fn vector_for(&self, codon: Codon) -> Vector {
        self.codon_to_vector[codon.index()]
    }

    /// Lookup by canonical codon index
    pub fn vector_at(&self, index: usize) -> Option<Vector> {
        self.codon_to_vector.get(index).copied()
    }

    /// Codons currently coding for `vector`, in the order they joined the bucket
    pub fn codons_for(&self, vector: Vector) -> &[Codon] {
        &self.vector_to_codons[vector.id()]
    }

    /// Pick one synonymous codon for `vector`, uniformly at random.
    ///
    /// This is the only non-deterministic operation on the table; callers
    /// that need reproducible output must seed `rng` themselves.
    pub fn sample_codon<R: Rng + ?Sized>(&self, vector: Vector, rng: &mut R) -> Result<Codon> {
        let bucket = self.codons_for(vector);
        if bucket.is_empty() {
            return Err(StylusError::InvalidTable(format!(
                "Vector {} does not map to any codons",
                vector
            )));
        }
        Ok(bucket[rng.gen_range(0..bucket.len())])
    }

    /// Re-derive the assignment and check both maps against each other
    pub fn validate(&self) -> Result<()> {
        match self.check() {
            Ok(()) => {
                log::info!("Codon table {} is valid", self.uuid);
                Ok(())
            }
            Err(e) => {
                log::warn!("Codon table {} is invalid: {}", self.uuid, e);
                Err(e)
            }
        }
    }

    fn check(&self) -> Result<()> {
        if self.uuid.trim().is_empty() {
            return Err(StylusError::InvalidTable(
                "Codon table is missing a UUID".to_string(),
            ));
        }

        if self.vector_to_codons.len() != VECTOR_COUNT {
            return Err(StylusError::InvalidTable(format!(
                "Vector map contains {} entries - it should have {}",
                self.vector_to_codons.len(),
                VECTOR_COUNT
            )));
        }

        // Each vector must be reached and must only hold codons that map back to it
        let mut seen = [false; CODON_COUNT];
        let mut total = 0;
        for vector in Vector::ALL {
            let bucket = self.codons_for(vector);
            if bucket.is_empty() {
                return Err(StylusError::InvalidTable(format!(
                    "Vector {} does not map to any codons",
                    vector
                )));
            }

            for codon in bucket {
                if self.vector_for(*codon) != vector {
                    return Err(StylusError::InvalidTable(format!(
                        "Vector {} lists codon {} which maps to {}",
                        vector,
                        codon,
                        self.vector_for(*codon)
                    )));
                }
                if seen[codon.index()] {
                    return Err(StylusError::InvalidTable(format!(
                        "Codon {} appears more than once",
                        codon
                    )));
                }
                seen[codon.index()] = true;
                total += 1;
            }
        }

        // Each codon must sit in the bucket of the vector it maps to
        let mut mapped = [false; VECTOR_COUNT];
        for codon in Codon::all() {
            let vector = self.vector_for(codon);
            mapped[vector.id()] = true;
            if !self.codons_for(vector).contains(&codon) {
                return Err(StylusError::InvalidTable(format!(
                    "Codon {} maps to {} which does not list {}",
                    codon, vector, codon
                )));
            }
        }

        if total != CODON_COUNT {
            return Err(StylusError::InvalidTable(format!(
                "Buckets hold {} codons - they should hold {}",
                total, CODON_COUNT
            )));
        }

        if let Some(id) = mapped.iter().position(|m| !m) {
            return Err(StylusError::InvalidTable(format!(
                "Vector {} is not mapped by any codon",
                Vector::ALL[id]
            )));
        }

        Ok(())
    }
}
