//! HCF: the line oriented text format describing reference han glyphs.

pub mod parser;
pub mod stroke;

pub use parser::Hcf;
pub use stroke::{HcfGroup, HcfOverlap, HcfPoint, HcfStroke};
