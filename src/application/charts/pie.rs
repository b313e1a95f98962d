//! Chest-pain-type donut.

use std::f64::consts::TAU;

use crate::application::views::PieView;
use crate::ports::{Binding, ChartId, DrawCommand, DrawingSurface, Interaction, MarkId, MarkKey};

use super::{category_paint, palette};

const EDGE_MARGIN: f64 = 3.0;
/// Inner radius as a fraction of the outer radius.
const HOLE_RATIO: f64 = 0.5;
const HOVER_GROWTH: f64 = 2.0;

/// Draw one annular slice per category, clockwise from twelve o'clock.
///
/// While a chest-pain filter is active every other slice is dimmed.
pub fn render_pie<S: DrawingSurface>(view: Option<&PieView>, hover: Option<MarkKey>, surface: &mut S) {
    surface.clear();
    let Some(view) = view else {
        return;
    };

    let total = view.total();
    if total == 0 {
        return;
    }

    let (width, height) = surface.size();
    let radius = width.min(height) / 2.0 - EDGE_MARGIN;
    if radius <= 0.0 {
        return;
    }
    let (cx, cy) = (width / 2.0, height / 2.0);

    let mut start = 0.0;
    for (i, slice) in view.slices.iter().enumerate() {
        let sweep = slice.count as f64 / total as f64 * TAU;
        let end = start + sweep;

        let hovered = hover == Some(MarkKey::Slice(i));
        let dimmed = view.selected.as_deref().is_some_and(|key| key != slice.key);
        let paint = if dimmed {
            category_paint(i).with_opacity(palette::DIMMED_OPACITY)
        } else {
            category_paint(i)
        };

        surface.draw(DrawCommand::Arc {
            cx,
            cy,
            inner_radius: radius * HOLE_RATIO,
            outer_radius: if hovered { radius + HOVER_GROWTH } else { radius },
            start_angle: start,
            end_angle: end,
            paint,
            binding: Some(
                Binding::hover(
                    MarkId::new(ChartId::ChestPainPie, MarkKey::Slice(i)),
                    format!("{}: {}", slice.key, slice.count),
                )
                .clickable(Interaction::ToggleChestPain(slice.key.clone())),
            ),
        });

        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::RecordingSurface;
    use crate::application::views::PieSlice;

    fn view(selected: Option<&str>) -> PieView {
        PieView {
            slices: vec![
                PieSlice {
                    key: "ATA".to_string(),
                    count: 2,
                },
                PieSlice {
                    key: "ASY".to_string(),
                    count: 1,
                },
                PieSlice {
                    key: "Unknown".to_string(),
                    count: 1,
                },
            ],
            selected: selected.map(str::to_string),
        }
    }

    fn arc(surface: &RecordingSurface, i: usize) -> (f64, f64, f64, f32) {
        match surface.find_mark(MarkKey::Slice(i)) {
            Some(DrawCommand::Arc {
                start_angle,
                end_angle,
                outer_radius,
                paint,
                ..
            }) => (*start_angle, *end_angle, *outer_radius, paint.opacity),
            other => panic!("Slice {i} should be an arc, got {other:?}"),
        }
    }

    #[test]
    fn test_slices_sweep_full_circle_in_order() {
        let mut surface = RecordingSurface::new(60.0, 60.0);
        render_pie(Some(&view(None)), None, &mut surface);

        let (s0, e0, _, _) = arc(&surface, 0);
        let (s1, e1, _, _) = arc(&surface, 1);
        let (s2, e2, _, _) = arc(&surface, 2);

        assert_eq!(s0, 0.0);
        assert!((e0 - TAU / 2.0).abs() < 1e-9);
        assert_eq!(e0, s1);
        assert_eq!(e1, s2);
        assert!((e2 - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_colors_follow_slice_order() {
        let mut surface = RecordingSurface::new(60.0, 60.0);
        render_pie(Some(&view(None)), None, &mut surface);

        let Some(DrawCommand::Arc { paint, .. }) = surface.find_mark(MarkKey::Slice(1)) else {
            panic!("Slice should be an arc");
        };
        assert_eq!(*paint, palette::CATEGORIES[1]);
    }

    #[test]
    fn test_active_filter_dims_other_slices() {
        let mut surface = RecordingSurface::new(60.0, 60.0);
        render_pie(Some(&view(Some("ASY"))), None, &mut surface);

        assert_eq!(arc(&surface, 0).3, palette::DIMMED_OPACITY);
        assert_eq!(arc(&surface, 1).3, 1.0);
        assert_eq!(arc(&surface, 2).3, palette::DIMMED_OPACITY);
    }

    #[test]
    fn test_hover_grows_slice_and_click_toggles_filter() {
        let mut surface = RecordingSurface::new(60.0, 60.0);
        render_pie(Some(&view(None)), Some(MarkKey::Slice(2)), &mut surface);

        assert!(arc(&surface, 2).2 > arc(&surface, 0).2);

        let binding = surface
            .find_mark(MarkKey::Slice(2))
            .and_then(DrawCommand::binding)
            .expect("Slice should be bound");
        assert_eq!(
            binding.on_click,
            Some(Interaction::ToggleChestPain("Unknown".to_string()))
        );
        assert_eq!(binding.tooltip.as_deref(), Some("Unknown: 1"));
    }

    #[test]
    fn test_hit_test_finds_slice() {
        let mut surface = RecordingSurface::new(60.0, 60.0);
        render_pie(Some(&view(None)), None, &mut surface);

        // Right of center, inside the ring: first half of the circle (ATA).
        let hit = surface.hit_test(50.0, 30.0).expect("Should hit a slice");
        assert_eq!(hit.mark.key, MarkKey::Slice(0));
        // Center hole.
        assert!(surface.hit_test(30.0, 30.0).is_none());
    }
}
