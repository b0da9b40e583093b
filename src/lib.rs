pub mod config;
pub mod error;
pub mod genetics;
pub mod geometry;
pub mod han;
