//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O.

mod filter;
pub mod metrics;
mod patient;
mod record;
mod risk;

pub use filter::{AgeRange, FilterState};
pub use metrics::Bin;
pub use patient::{FieldError, HypotheticalPatient, PatientField};
pub use record::{ExerciseAngina, Record, Sex, UNKNOWN_CHEST_PAIN};
pub use risk::RiskLevel;
