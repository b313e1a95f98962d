//! In-memory drawing surface.
//!
//! Keeps the issued draw commands so that they can be inspected and
//! hit-tested. Used by the renderer tests and as the reference for what a
//! backend must support.

use crate::ports::{topmost_binding, Binding, DrawCommand, DrawingSurface, MarkKey};

/// Extra reach given to point marks when hit-testing.
const POINT_SLOP: f64 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Bound marks whose key satisfies `predicate`, in draw order.
    pub fn marks_where(&self, predicate: impl Fn(&MarkKey) -> bool) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| c.binding().is_some_and(|b| predicate(&b.mark.key)))
            .collect()
    }

    #[must_use]
    pub fn find_mark(&self, key: MarkKey) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| c.binding().is_some_and(|b| b.mark.key == key))
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Topmost bound mark covering `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Binding> {
        topmost_binding(&self.commands, x, y, POINT_SLOP)
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
