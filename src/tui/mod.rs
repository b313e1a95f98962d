//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides the dashboard host:
//! - Patient form and comparison summary
//! - Four chart canvases with mouse and keyboard interaction
//! - Background dataset loading

mod app;
mod styles;
mod ui;
mod worker;

pub use app::{App, Focus};
pub use styles::MedicalTheme;
pub use worker::{IngestionReport, IngestionWorker};
