//! Application layer: Use cases and services.
//!
//! This module owns the dashboard state and turns it into drawable charts:
//! the state store holds the data, the view builder projects it, the chart
//! renderers draw the projections and the interaction router ties UI events
//! back to store mutations.

pub mod charts;
mod router;
mod store;
pub mod views;

pub use charts::ChartSurfaces;
pub use router::{DispatchOutcome, InteractionRouter, Invalidation, UiEvent};
pub use store::StateStore;
pub use views::{Metric, SummaryView, ViewBuilder};
