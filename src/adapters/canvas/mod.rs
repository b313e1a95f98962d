//! Terminal canvas adapter: Implementation of DrawingSurface.
//!
//! Stores the command stream for one chart and rasterizes it onto a ratatui
//! braille canvas. Each terminal cell holds 2x4 braille dots and one surface
//! unit is one dot, so a chart placed in a `cols x rows` area has a surface
//! of `cols * 2` by `rows * 4` units.
//!
//! Braille cells carry a single foreground color, so overlapping marks in
//! one cell take the color of the last mark drawn there. Opacity is
//! approximated by blending against the dashboard background.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Line, Painter, Shape};
use ratatui::widgets::Widget;

use crate::ports::{topmost_binding, Binding, DrawCommand, DrawingSurface, MarkId, Paint, TextAnchor};

/// Dots per terminal cell.
const DOTS_X: f64 = 2.0;
const DOTS_Y: f64 = 4.0;

/// A terminal cell is much coarser than a mouse pointer on a page.
const POINTER_SLOP: f64 = 2.0;

/// Stroke width drawn around outlined points.
const STROKE_WIDTH: f64 = 0.8;

/// Color translucent paints are blended against (#0F172A).
pub const BACKGROUND: Paint = Paint::rgb(15, 23, 42);

/// Braille canvas surface for one chart.
#[derive(Debug, Clone, Default)]
pub struct CanvasSurface {
    area: Rect,
    commands: Vec<DrawCommand>,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Move the surface to a new screen area.
    ///
    /// Returns `true` when the size changed, in which case the caller must
    /// redraw the chart: stored commands are in the old coordinates.
    pub fn resize(&mut self, area: Rect) -> bool {
        let resized = area.width != self.area.width || area.height != self.area.height;
        self.area = area;
        resized
    }

    /// Bound marks in draw order, for keyboard selection.
    #[must_use]
    pub fn bindings(&self) -> Vec<&Binding> {
        self.commands.iter().filter_map(DrawCommand::binding).collect()
    }

    #[must_use]
    pub fn binding_for(&self, mark: MarkId) -> Option<&Binding> {
        self.commands
            .iter()
            .filter_map(DrawCommand::binding)
            .find(|b| b.mark == mark)
    }

    /// Surface coordinates of the center of a terminal cell, if the cell is
    /// inside this surface.
    #[must_use]
    pub fn cell_to_surface(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.area;
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }
        Some((
            (f64::from(column - area.x) + 0.5) * DOTS_X,
            (f64::from(row - area.y) + 0.5) * DOTS_Y,
        ))
    }

    /// Topmost bound mark under a terminal cell.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&Binding> {
        let (x, y) = self.cell_to_surface(column, row)?;
        topmost_binding(&self.commands, x, y, POINTER_SLOP)
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (
            f64::from(self.area.width) * DOTS_X,
            f64::from(self.area.height) * DOTS_Y,
        )
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Widget for &CanvasSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(color(BACKGROUND))
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in &self.commands {
                    match command {
                        DrawCommand::Line {
                            x1,
                            y1,
                            x2,
                            y2,
                            paint,
                        } => ctx.draw(&Line {
                            x1: *x1,
                            y1: height - y1,
                            x2: *x2,
                            y2: height - y2,
                            color: color(*paint),
                        }),
                        DrawCommand::Text { .. } => {}
                        DrawCommand::Point {
                            x,
                            y,
                            radius,
                            stroke: Some(stroke),
                            ..
                        } => {
                            let outline = DrawCommand::Point {
                                x: *x,
                                y: *y,
                                radius: radius + STROKE_WIDTH,
                                paint: *stroke,
                                stroke: None,
                                binding: None,
                            };
                            ctx.draw(&Fill::new(&outline, height, *stroke));
                            ctx.draw(&Fill::new(command, height, fill_paint(command)));
                        }
                        _ => ctx.draw(&Fill::new(command, height, fill_paint(command))),
                    }
                }

                // Labels go on top of every mark.
                for command in &self.commands {
                    if let DrawCommand::Text {
                        x,
                        y,
                        text,
                        paint,
                        anchor,
                    } = command
                    {
                        let x = (x - anchor_offset(text, *anchor)).clamp(0.0, width);
                        ctx.print(
                            x,
                            height - y,
                            TextLine::styled(text.clone(), Style::default().fg(color(*paint))),
                        );
                    }
                }
            })
            .render(area, buf);
    }
}

/// Fill color of an area mark.
fn fill_paint(command: &DrawCommand) -> Paint {
    match command {
        DrawCommand::Point { paint, .. }
        | DrawCommand::Rect { paint, .. }
        | DrawCommand::Arc { paint, .. }
        | DrawCommand::Line { paint, .. }
        | DrawCommand::Text { paint, .. } => *paint,
    }
}

/// Horizontal shift, in surface units, that places text at its anchor.
fn anchor_offset(text: &str, anchor: TextAnchor) -> f64 {
    let width = text.chars().count() as f64 * DOTS_X;
    match anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => width / 2.0,
        TextAnchor::End => width,
    }
}

/// Terminal color for a paint, blended against [`BACKGROUND`].
#[must_use]
pub fn color(paint: Paint) -> Color {
    let alpha = f64::from(paint.opacity.clamp(0.0, 1.0));
    let mix = |c: u8, bg: u8| (f64::from(bg) + (f64::from(c) - f64::from(bg)) * alpha).round() as u8;
    Color::Rgb(
        mix(paint.r, BACKGROUND.r),
        mix(paint.g, BACKGROUND.g),
        mix(paint.b, BACKGROUND.b),
    )
}

/// Rasterizes an area mark by sampling every dot center in its bounds.
struct Fill<'a> {
    command: &'a DrawCommand,
    /// Surface height, for flipping into canvas coordinates
    height: f64,
    color: Color,
}

impl<'a> Fill<'a> {
    fn new(command: &'a DrawCommand, height: f64, paint: Paint) -> Self {
        Self {
            command,
            height,
            color: color(paint),
        }
    }

    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        match *self.command {
            DrawCommand::Point { x, y, radius, .. } => {
                Some((x - radius, y - radius, x + radius, y + radius))
            }
            DrawCommand::Rect {
                x, y, width, height, ..
            } => Some((x, y, x + width, y + height)),
            DrawCommand::Arc {
                cx,
                cy,
                outer_radius,
                ..
            } => Some((
                cx - outer_radius,
                cy - outer_radius,
                cx + outer_radius,
                cy + outer_radius,
            )),
            DrawCommand::Line { .. } | DrawCommand::Text { .. } => None,
        }
    }
}

impl Shape for Fill<'_> {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let Some((left, top, right, bottom)) = self.bounds() else {
            return;
        };

        let mut y = top.floor() + 0.5;
        while y <= bottom {
            let mut x = left.floor() + 0.5;
            while x <= right {
                if self.command.contains(x, y, 0.0) {
                    if let Some((px, py)) = painter.get_point(x, self.height - y) {
                        painter.paint(px, py, self.color);
                    }
                }
                x += 1.0;
            }
            y += 1.0;
        }
    }
}
