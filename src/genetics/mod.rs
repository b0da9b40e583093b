pub mod codon;
pub mod codon_table;
pub mod coherence;
mod coherence_table;
pub mod direction;
pub mod document;
pub mod gene;
pub mod vector;

pub use codon::{codon_to_index, Codon};
pub use codon_table::{CodonTable, STANDARD_UUID};
pub use coherence::is_coherent;
pub use direction::Direction;
pub use document::{CodonEntry, CodonTableDocument};
pub use gene::{Gene, Segment};
pub use vector::{LengthClass, Vector};
