//! # Cardioscope
//!
//! Interactive heart-disease cohort explorer.
//!
//! A user edits a hypothetical patient, loads a cohort of historical
//! records, and the dashboard shows where the patient falls relative to the
//! population: an age / max-heart-rate scatter, cholesterol and age
//! histograms, and a chest-pain-type donut, with cross-chart filtering.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (Record, HypotheticalPatient, FilterState, RiskLevel, metrics)
//! - `ports`: Trait definitions for collaborators (dataset sources, drawing surfaces)
//! - `adapters`: Concrete implementations (CSV ingestion, ratatui canvas, recording surface)
//! - `application`: State store, derived views, chart renderers, interaction router
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{FilterState, HypotheticalPatient, PatientField, Record, RiskLevel};

/// Result type for Cardioscope operations
pub type Result<T> = std::result::Result<T, CardioscopeError>;

/// Main error type for Cardioscope
#[derive(Debug, thiserror::Error)]
pub enum CardioscopeError {
    #[error("Invalid patient input: {0}")]
    Field(#[from] domain::FieldError),

    #[error("Ingestion failed: {0}")]
    Ingestion(#[from] adapters::IngestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
