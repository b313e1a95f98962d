//! Linear domain-to-surface mapping and plot-area geometry.

/// Inner plot margins in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Rectangle left for marks after margins are taken off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Inset a `width` × `height` surface. Collapses instead of inverting
    /// when the surface is smaller than the margins.
    #[must_use]
    pub fn inset(width: f64, height: f64, margins: Margins) -> Self {
        let left = margins.left.min(width);
        let top = margins.top.min(height);
        Self {
            left,
            top,
            right: (width - margins.right).max(left),
            bottom: (height - margins.bottom).max(top),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[must_use]
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(self.left, self.right), y.clamp(self.top, self.bottom))
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Maps `domain` linearly onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// A zero-width domain maps everything to the middle of the range.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values (multiples of 1, 2 or 5 × 10ⁿ) spanning the domain,
    /// roughly `count` of them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };

        if !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if hi == lo || count == 0 {
            return vec![lo];
        }

        let step = tick_step(lo, hi, count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

/// Tick label without trailing zeros.
#[must_use]
pub fn tick_label(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map_and_inverted_range() {
        let x = LinearScale::new((20.0, 80.0), (0.0, 120.0));
        assert_eq!(x.map(20.0), 0.0);
        assert_eq!(x.map(50.0), 60.0);

        let y = LinearScale::new((60.0, 220.0), (100.0, 0.0));
        assert_eq!(y.map(60.0), 100.0);
        assert_eq!(y.map(220.0), 0.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let x = LinearScale::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(x.map(5.0), 5.0);
    }

    #[test]
    fn test_nice_ticks() {
        let x = LinearScale::new((20.0, 80.0), (0.0, 1.0));
        assert_eq!(x.ticks(5), vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);

        let y = LinearScale::new((60.0, 220.0), (1.0, 0.0));
        assert_eq!(y.ticks(5), vec![100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_plot_area_inset() {
        let area = PlotArea::inset(100.0, 50.0, Margins {
            top: 4.0,
            right: 4.0,
            bottom: 8.0,
            left: 12.0,
        });
        assert_eq!(area.width(), 84.0);
        assert_eq!(area.height(), 38.0);

        let tiny = PlotArea::inset(5.0, 5.0, Margins {
            top: 4.0,
            right: 4.0,
            bottom: 8.0,
            left: 12.0,
        });
        assert!(tiny.is_degenerate());
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(150.0), "150");
        assert_eq!(tick_label(2.5), "2.5");
    }
}
