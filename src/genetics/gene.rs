use super::codon::{Codon, CODON_LENGTH, START_CODON};
use super::codon_table::CodonTable;
use super::coherence::{is_coherent, TRIVECTOR_LENGTH};
use super::vector::Vector;
use crate::error::{Result, StylusError};
use crate::geometry::{Line, Point, Range};
use rand::Rng;
use serde::Serialize;

/// Maximal run of vectors sharing the same coherence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// First and last acid index covered (inclusive)
    pub first_acid: usize,
    pub last_acid: usize,
    pub bases: Range,
    pub coherent: bool,
    pub units: f64,
}

impl Segment {
    fn open(acid: usize, vector: Vector, coherent: bool) -> Result<Self> {
        Ok(Self {
            first_acid: acid,
            last_acid: acid,
            bases: acid_bases(acid, acid)?,
            coherent,
            units: vector.length(),
        })
    }

    fn extend(&mut self, acid: usize, vector: Vector) -> Result<()> {
        self.last_acid = acid;
        self.bases = acid_bases(self.first_acid, acid)?;
        self.units += vector.length();
        Ok(())
    }

    pub fn acid_count(&self) -> usize {
        self.last_acid - self.first_acid + 1
    }
}

// Acid `i` occupies bases 3i+1 ..= 3i+3; acid 0 is the start codon
fn acid_bases(first: usize, last: usize) -> Result<Range> {
    Range::new(CODON_LENGTH * first + 1, CODON_LENGTH * last + CODON_LENGTH)
}

/// A base sequence translated into vectors and drawn from an origin
#[derive(Debug, Clone, Serialize)]
pub struct Gene {
    bases: String,
    origin: Point,
    acids: Vec<Vector>,
    points: Vec<Point>,
    coherence: Vec<u8>,
    segments: Vec<Segment>,
    units: f64,
}

impl Gene {
    /// Translate `bases` from the start codon through the first stop codon.
    ///
    /// Trailing bases after the stop codon are ignored.
    pub fn translate(bases: &str, table: &CodonTable, origin: Point) -> Result<Self> {
        if let Some((i, c)) = bases
            .char_indices()
            .find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'T'))
        {
            return Err(StylusError::MalformedGenome(format!(
                "Illegal base {:?} at position {}",
                c,
                i + 1
            )));
        }
        if !bases.starts_with(START_CODON) {
            return Err(StylusError::MalformedGenome(format!(
                "Genome must begin with the start codon {}",
                START_CODON
            )));
        }

        let mut acids = Vec::with_capacity(bases.len() / CODON_LENGTH);
        let mut terminated = false;
        for (i, chunk) in bases.as_bytes().chunks(CODON_LENGTH).enumerate() {
            if chunk.len() < CODON_LENGTH {
                break;
            }
            let vector = table.vector_for(Codon::from_bytes(chunk)?);
            acids.push(vector);
            if i > 0 && vector.is_stop() {
                terminated = true;
                break;
            }
        }

        if !terminated {
            return Err(StylusError::MalformedGenome(
                "Genome has no stop codon".to_string(),
            ));
        }
        if acids.len() < TRIVECTOR_LENGTH + 2 {
            return Err(StylusError::MalformedGenome(format!(
                "Genome codes for {} vectors - at least {} are required",
                acids.len() - 2,
                TRIVECTOR_LENGTH
            )));
        }

        let coding = &bases[..acids.len() * CODON_LENGTH];

        let mut points = Vec::with_capacity(acids.len());
        points.push(origin);
        for acid in &acids[1..] {
            let last = points[points.len() - 1];
            points.push(last.advance(*acid));
        }

        let units = acids[1..acids.len() - 1].iter().map(|v| v.length()).sum();
        let coherence = coherence_counts(&acids);
        let segments = build_segments(&acids, &coherence)?;

        log::debug!(
            "Translated {} bases into {} vectors, {} segments, {:.3} units",
            coding.len(),
            acids.len(),
            segments.len(),
            units
        );

        Ok(Self {
            bases: coding.to_string(),
            origin,
            acids,
            points,
            coherence,
            segments,
            units,
        })
    }

    /// Coding bases, start codon through stop codon
    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn acids(&self) -> &[Vector] {
        &self.acids
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of coherent trivectors each vector belongs to (0 to 3)
    pub fn coherence(&self) -> &[u8] {
        &self.coherence
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total drawn length, excluding start and stop
    pub fn units(&self) -> f64 {
        self.units
    }

    /// Line drawn by acid `i` (`None` for the start codon or past the end)
    pub fn line(&self, i: usize) -> Option<Line> {
        if i == 0 || i >= self.points.len() {
            return None;
        }
        Some(Line::new(self.points[i - 1], self.points[i]))
    }

    /// Points from the one preceding `segment` through its final point
    pub fn segment_points(&self, segment: &Segment) -> &[Point] {
        let first = segment.first_acid.saturating_sub(1);
        let last = segment.last_acid.min(self.points.len() - 1);
        &self.points[first..=last]
    }

    /// Re-encode the vectors through `table`, drawing synonymous codons from `rng`
    pub fn reencode<R: Rng + ?Sized>(&self, table: &CodonTable, rng: &mut R) -> Result<String> {
        let mut bases = String::with_capacity(self.bases.len());
        bases.push_str(START_CODON);
        for acid in &self.acids[1..] {
            bases.push_str(table.sample_codon(*acid, rng)?.as_str());
        }
        Ok(bases)
    }
}

// Each vector counts the coherent trivectors it sits in; stops before the trivector
// that would reach the stop codon
fn coherence_counts(acids: &[Vector]) -> Vec<u8> {
    let mut counts = vec![0u8; acids.len()];
    let mut i = 1;
    while i + 2 < acids.len() && !acids[i + 2].is_stop() {
        if is_coherent(acids[i], acids[i + 1], acids[i + 2]) {
            counts[i] += 1;
            counts[i + 1] += 1;
            counts[i + 2] += 1;
        }
        i += 1;
    }
    counts
}

fn build_segments(acids: &[Vector], coherence: &[u8]) -> Result<Vec<Segment>> {
    let mut segments: Vec<Segment> = Vec::new();

    for (i, acid) in acids.iter().enumerate().skip(1) {
        if acid.is_stop() {
            break;
        }

        let coherent = coherence[i] > 0;
        if let Some(segment) = segments.last_mut().filter(|s| s.coherent == coherent) {
            segment.extend(i, *acid)?;
            continue;
        }
        segments.push(Segment::open(i, *acid, coherent)?);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRAIGHT: &str = "ATGCTTCTTCTTTAA";

    #[test]
    fn test_straight_gene() {
        let table = CodonTable::standard();
        let gene = Gene::translate(STRAIGHT, &table, Point::new(1.0, 1.0)).unwrap();

        assert_eq!(
            gene.acids(),
            &[
                Vector::NortheastMedium,
                Vector::NorthShort,
                Vector::NorthShort,
                Vector::NorthShort,
                Vector::Stop
            ]
        );
        assert_eq!(gene.points()[0], Point::new(1.0, 1.0));
        assert_eq!(gene.points()[3], Point::new(1.0, 4.0));
        assert_eq!(gene.points()[4], Point::new(1.0, 4.0));
        assert_eq!(gene.units(), 3.0);
        assert_eq!(gene.coherence(), &[0, 1, 1, 1, 0]);

        assert_eq!(gene.segments().len(), 1);
        let segment = &gene.segments()[0];
        assert!(segment.coherent);
        assert_eq!((segment.first_acid, segment.last_acid), (1, 3));
        assert_eq!(segment.bases, Range::new(4, 12).unwrap());
        assert_eq!(segment.units, 3.0);
    }

    #[test]
    fn test_reversal_is_incoherent() {
        let table = CodonTable::standard();
        let gene = Gene::translate("ATGCTTCAACTTTAA", &table, Point::default()).unwrap();
        assert_eq!(gene.coherence(), &[0, 0, 0, 0, 0]);
        assert_eq!(gene.segments().len(), 1);
        assert!(!gene.segments()[0].coherent);
    }

    #[test]
    fn test_trailing_bases_are_ignored() {
        let table = CodonTable::standard();
        let gene = Gene::translate("ATGCTTCTTCTTTAAGGGC", &table, Point::default()).unwrap();
        assert_eq!(gene.bases(), STRAIGHT);
        assert_eq!(gene.acids().len(), 5);
    }

    #[test]
    fn test_line_and_segment_points() {
        let table = CodonTable::standard();
        let gene = Gene::translate(STRAIGHT, &table, Point::default()).unwrap();

        assert!(gene.line(0).is_none());
        let line = gene.line(2).unwrap();
        assert_eq!(line.start, Point::new(0.0, 1.0));
        assert_eq!(line.end, Point::new(0.0, 2.0));
        assert!(gene.line(5).is_none());

        let points = gene.segment_points(&gene.segments()[0]);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[3], Point::new(0.0, 3.0));
    }

    #[test]
    fn test_malformed_genomes() {
        let table = CodonTable::standard();
        for bad in [
            "",
            "CTTCTTCTTTAA",
            "ATGCTTCTTCTT",
            "ATGCTTCTTCTTTA",
            "ATGcttCTTCTTTAA",
            "ATGCTTNTTCTTTAA",
            "ATGCTTTAA",
        ] {
            assert!(
                matches!(
                    Gene::translate(bad, &table, Point::default()),
                    Err(StylusError::MalformedGenome(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_reencode_preserves_vectors() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let table = CodonTable::standard();
        let gene = Gene::translate(STRAIGHT, &table, Point::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let bases = gene.reencode(&table, &mut rng).unwrap();
        assert_eq!(bases.len(), STRAIGHT.len());
        assert!(bases.starts_with("ATG"));

        let again = Gene::translate(&bases, &table, Point::default()).unwrap();
        assert_eq!(again.acids(), gene.acids());
    }
}
