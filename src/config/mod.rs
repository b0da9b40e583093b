pub mod codon_table;
pub mod genome;
pub mod han;
pub mod manager;
pub mod traits;

pub use codon_table::CodonTableConfig;
pub use genome::GenomeConfig;
pub use han::HanConfig;
pub use manager::{ConfigManager, StylusConfig};
pub use traits::ConfigSection;
