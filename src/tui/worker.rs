//! Background ingestion worker for non-blocking dataset loads.
//!
//! Parsing a large cohort file runs on its own thread so the TUI main loop
//! stays responsive. Every request is stamped with a generation number;
//! only the result of the most recent request is delivered, so a slow load
//! that finishes after a newer one can never overwrite it.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::domain::Record;
use crate::ports::DatasetSource;

/// Outcome of one ingestion request.
#[derive(Debug, Clone)]
pub struct IngestionReport {
    pub generation: u64,
    /// Human-readable source label
    pub source: String,
    /// Records, or the failure message to show the user
    pub outcome: Result<Vec<Record>, String>,
}

/// Spawns ingestion threads and filters superseded results.
pub struct IngestionWorker {
    tx: Sender<IngestionReport>,
    rx: Receiver<IngestionReport>,
    /// Generation of the most recent request
    latest: u64,
    /// Whether the most recent request is still running
    in_flight: bool,
}

impl Default for IngestionWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestionWorker {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            latest: 0,
            in_flight: false,
        }
    }

    /// Start loading `source` in the background.
    ///
    /// Returns the generation assigned to this request. Any earlier request
    /// still running becomes stale.
    pub fn spawn<D>(&mut self, source: D) -> u64
    where
        D: DatasetSource + 'static,
    {
        self.latest += 1;
        self.in_flight = true;

        let generation = self.latest;
        let tx = self.tx.clone();
        let label = source.describe();
        tracing::info!(generation, source = %label, "Ingestion requested");

        thread::spawn(move || {
            // A panicking source still reports, so the request never stays in flight.
            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| source.load())) {
                Ok(Ok(records)) => Ok(records),
                Ok(Err(e)) => {
                    tracing::error!(generation, source = %label, "Ingestion failed: {}", e);
                    Err(e.to_string())
                }
                Err(_) => {
                    tracing::error!(generation, source = %label, "Ingestion thread panicked");
                    Err("ingestion aborted unexpectedly".to_string())
                }
            };
            // Receiver gone means the app is shutting down.
            let _ = tx.send(IngestionReport {
                generation,
                source: label,
                outcome,
            });
        });

        generation
    }

    /// Whether the latest request has not reported yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Next current report, if any (non-blocking).
    ///
    /// Stale reports are drained and dropped.
    pub fn try_recv(&mut self) -> Option<IngestionReport> {
        while let Ok(report) = self.rx.try_recv() {
            if report.generation != self.latest {
                tracing::debug!(
                    generation = report.generation,
                    latest = self.latest,
                    "Discarding superseded ingestion result"
                );
                continue;
            }
            self.in_flight = false;
            return Some(report);
        }
        None
    }
}
