use thiserror::Error;

#[derive(Error, Debug)]
pub enum StylusError {
    #[error("Malformed codon: {0:?}")]
    MalformedCodon(String),

    #[error("Unknown codon: {0:?}")]
    UnknownCodon(String),

    #[error("Unknown vector: {0:?}")]
    UnknownVector(String),

    #[error("Invalid codon table: {0}")]
    InvalidTable(String),

    #[error("Malformed stroke: {0}")]
    MalformedStroke(String),

    #[error("HCF error at line {line}: {reason}")]
    Hcf { line: usize, reason: String },

    #[error("Unable to open HCF source {path}: {source}")]
    HcfSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed genome: {0}")]
    MalformedGenome(String),

    #[error("Invalid range: first base {first} must be at least 1 and not after last base {last}")]
    InvalidRange { first: usize, last: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StylusError>;
