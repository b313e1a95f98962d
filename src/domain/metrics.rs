//! Numeric helpers over cohort attributes.

/// One histogram bucket.
///
/// Covers `[lower, upper)`, except the last bucket of a partition which is
/// closed on the right so the domain maximum is counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub closed_right: bool,
}

impl Bin {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.closed_right {
            value >= self.lower && value <= self.upper
        } else {
            value >= self.lower && value < self.upper
        }
    }
}

/// Arithmetic mean; 0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Minimum and maximum, ignoring NaN. `None` when nothing is comparable.
#[must_use]
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Partition `[domain_min, domain_max]` into `bucket_count` equal-width bins
/// and count `values` into them.
///
/// Values outside the domain (and NaN) are dropped. Adjacent bins share
/// their boundary exactly, and the last upper bound is `domain_max` itself.
#[must_use]
pub fn bin(values: &[f64], domain_min: f64, domain_max: f64, bucket_count: usize) -> Vec<Bin> {
    if bucket_count == 0 || !(domain_min <= domain_max) {
        return Vec::new();
    }

    let width = (domain_max - domain_min) / bucket_count as f64;
    let edges: Vec<f64> = (0..=bucket_count)
        .map(|i| {
            if i == bucket_count {
                domain_max
            } else {
                domain_min + width * i as f64
            }
        })
        .collect();

    let mut bins: Vec<Bin> = edges
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Bin {
            lower: pair[0],
            upper: pair[1],
            count: 0,
            closed_right: i + 1 == bucket_count,
        })
        .collect();

    for &value in values {
        if let Some(index) = bin_index(&bins, value) {
            bins[index].count += 1;
        }
    }

    bins
}

/// Index of the bin containing `value`, if any.
#[must_use]
pub fn bin_index(bins: &[Bin], value: f64) -> Option<usize> {
    let first = bins.first()?;
    let last = bins.last()?;
    if value.is_nan() || value < first.lower || value > last.upper {
        return None;
    }

    let width = last.upper - first.lower;
    let mut index = if width > 0.0 {
        (((value - first.lower) / width) * bins.len() as f64).floor() as usize
    } else {
        bins.len() - 1
    };
    index = index.min(bins.len() - 1);

    // Floating-point division can land one bucket off near an edge.
    while index > 0 && value < bins[index].lower {
        index -= 1;
    }
    while index + 1 < bins.len() && !bins[index].contains(value) {
        index += 1;
    }

    bins[index].contains(value).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[200.0, 220.0, 240.0]) - 220.0).abs() < f64::EPSILON);
        let values = [1.5, 2.5, 9.0, -4.0];
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert!((mean(&values) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extent_skips_nan() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_bin_counts_every_in_domain_value_once() {
        let values = [28.0, 29.0, 35.5, 40.0, 40.0, 51.2, 63.0, 77.0, 12.0, 90.0, f64::NAN];
        let bins = bin(&values, 28.0, 77.0, 15);

        assert_eq!(bins.len(), 15);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let bins = bin(&[1.0, 2.0], 0.1, 100.3, 15);

        assert_eq!(bins.first().map(|b| b.lower), Some(0.1));
        assert_eq!(bins.last().map(|b| b.upper), Some(100.3));
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
            assert!(!pair[0].closed_right);
        }
        assert!(bins.last().map(|b| b.closed_right).unwrap_or(false));
    }

    #[test]
    fn test_domain_max_lands_in_last_bin() {
        let bins = bin(&[0.0, 10.0], 0.0, 10.0, 5);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[4].count, 1);
        assert_eq!(bin_index(&bins, 2.0), Some(1));
        assert_eq!(bin_index(&bins, 10.5), None);
    }

    #[test]
    fn test_degenerate_domain() {
        let bins = bin(&[5.0, 5.0, 6.0], 5.0, 5.0, 3);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert!(bin(&[1.0], 0.0, 1.0, 0).is_empty());
        assert!(bin(&[1.0], 2.0, 1.0, 4).is_empty());
    }
}
