//! Drawing surface port: the draw-command vocabulary chart renderers emit.
//!
//! Coordinates are surface units with the origin at the top-left corner and
//! `y` growing downward. Angles are radians measured clockwise from twelve
//! o'clock. The collaborator behind the trait owns actual pixel (or cell)
//! rendering.

use crate::domain::AgeRange;

/// Fill color with opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub opacity: f32,
}

impl Paint {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, opacity: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, opacity: f32) -> Self {
        Self { r, g, b, opacity }
    }

    #[must_use]
    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}

impl From<(u8, u8, u8)> for Paint {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// The four dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Scatter,
    CholesterolHistogram,
    AgeHistogram,
    ChestPainPie,
}

impl ChartId {
    pub const ALL: [ChartId; 4] = [
        Self::Scatter,
        Self::CholesterolHistogram,
        Self::AgeHistogram,
        Self::ChestPainPie,
    ];

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Scatter => "Age vs Max Heart Rate",
            Self::CholesterolHistogram => "Cholesterol Distribution",
            Self::AgeHistogram => "Age Distribution",
            Self::ChestPainPie => "Chest Pain Type",
        }
    }
}

/// The data item a mark was drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKey {
    /// Index into the filtered scatter points
    Record(usize),
    Patient,
    Bin(usize),
    Slice(usize),
}

/// Globally unique mark identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkId {
    pub chart: ChartId,
    pub key: MarkKey,
}

impl MarkId {
    #[must_use]
    pub const fn new(chart: ChartId, key: MarkKey) -> Self {
        Self { chart, key }
    }
}

/// Typed event a clicked mark feeds back to the interaction router.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    ToggleAgeRange(AgeRange),
    ToggleChestPain(String),
}

/// Interaction binding attached to a mark.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub mark: MarkId,
    /// Text shown while hovered
    pub tooltip: Option<String>,
    /// Event emitted when clicked; `None` for display-only marks
    pub on_click: Option<Interaction>,
}

impl Binding {
    #[must_use]
    pub fn hover(mark: MarkId, tooltip: impl Into<String>) -> Self {
        Self {
            mark,
            tooltip: Some(tooltip.into()),
            on_click: None,
        }
    }

    #[must_use]
    pub fn clickable(mut self, interaction: Interaction) -> Self {
        self.on_click = Some(interaction);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point {
        x: f64,
        y: f64,
        radius: f64,
        paint: Paint,
        stroke: Option<Paint>,
        binding: Option<Binding>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
        binding: Option<Binding>,
    },
    Arc {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        paint: Paint,
        binding: Option<Binding>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        paint: Paint,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        paint: Paint,
        anchor: TextAnchor,
    },
}

impl DrawCommand {
    #[must_use]
    pub fn binding(&self) -> Option<&Binding> {
        match self {
            Self::Point { binding, .. } | Self::Rect { binding, .. } | Self::Arc { binding, .. } => {
                binding.as_ref()
            }
            Self::Line { .. } | Self::Text { .. } => None,
        }
    }

    /// Whether the filled area of this mark covers `(x, y)`.
    ///
    /// `slop` widens points so that coarse pointers can still hit them.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, slop: f64) -> bool {
        match *self {
            Self::Point {
                x: px,
                y: py,
                radius,
                ..
            } => (x - px).hypot(y - py) <= radius + slop,
            Self::Rect {
                x: rx,
                y: ry,
                width,
                height,
                ..
            } => x >= rx && x <= rx + width && y >= ry && y <= ry + height,
            Self::Arc {
                cx,
                cy,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                ..
            } => {
                let distance = (x - cx).hypot(y - cy);
                if distance < inner_radius || distance > outer_radius {
                    return false;
                }
                let angle = clock_angle(x - cx, y - cy);
                angle >= start_angle && angle <= end_angle
            }
            Self::Line { .. } | Self::Text { .. } => false,
        }
    }
}

/// Topmost bound mark covering `(x, y)`.
///
/// Later commands are drawn over earlier ones, so the search runs from the
/// end of the stream.
#[must_use]
pub fn topmost_binding(commands: &[DrawCommand], x: f64, y: f64, slop: f64) -> Option<&Binding> {
    commands
        .iter()
        .rev()
        .filter(|c| c.contains(x, y, slop))
        .find_map(DrawCommand::binding)
}

/// Angle of the offset `(dx, dy)` clockwise from twelve o'clock, in `[0, 2π)`.
#[must_use]
pub fn clock_angle(dx: f64, dy: f64) -> f64 {
    // Screen y grows downward, so "up" is -dy.
    let angle = dx.atan2(-dy);
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// A drawing target for one chart.
pub trait DrawingSurface {
    /// Drawable extent in surface units (width, height).
    fn size(&self) -> (f64, f64);

    /// Drop every previously issued command.
    fn clear(&mut self);

    /// Issue one command.
    fn draw(&mut self, command: DrawCommand);
}
