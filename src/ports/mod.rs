//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the dashboard engine and the outside world (file ingestion,
//! drawing backends).

mod ingest;
mod surface;

pub use ingest::DatasetSource;
pub use surface::{
    clock_angle, topmost_binding, Binding, ChartId, DrawCommand, DrawingSurface, Interaction, MarkId,
    MarkKey, Paint, TextAnchor,
};
