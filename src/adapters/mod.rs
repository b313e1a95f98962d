//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external libraries:
//! - `csv_file`: the csv crate for cohort ingestion
//! - `canvas`: ratatui braille canvas as a drawing surface
//! - `recording`: in-memory drawing surface for inspection

pub mod canvas;
pub mod csv_file;
pub mod recording;

// Re-export ingestion error for lib.rs
pub use csv_file::IngestError;
