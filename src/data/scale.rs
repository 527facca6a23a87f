use super::model::{AxisGroup, TelemetryDataset};

// ---------------------------------------------------------------------------
// Symmetric per-axis limits
// ---------------------------------------------------------------------------

/// Headroom applied above the largest magnitude on each axis.
pub const MARGIN_FACTOR: f64 = 1.05;

/// Half-range used for an axis whose series are all zero (or absent), so the
/// axis still has a usable span.
pub const MIN_RANGE: f64 = 0.1;

/// Symmetric half-range per axis group. Every axis spans
/// `[-limit, +limit]`, which keeps zero aligned across all four axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScales {
    limits: [f64; 4],
}

impl AxisScales {
    /// Scan the dataset and derive each group's half-range from its series'
    /// largest magnitude.
    pub fn from_dataset(dataset: &TelemetryDataset) -> Self {
        let mut max_abs = [0.0f64; 4];
        for series in &dataset.series {
            let peak = series
                .values
                .iter()
                .fold(0.0f64, |acc, &v| acc.max(v.abs()));
            let slot = &mut max_abs[series.group.index()];
            *slot = slot.max(peak);
        }

        let limits = max_abs.map(|m| if m > 0.0 { m * MARGIN_FACTOR } else { MIN_RANGE });
        AxisScales { limits }
    }

    /// The half-range of one axis group. Always strictly positive.
    pub fn limit(&self, group: AxisGroup) -> f64 {
        self.limits[group.index()]
    }

    /// Map a value on `group` into the shared plot space `[-1, 1]`.
    pub fn normalize(&self, group: AxisGroup, value: f64) -> f64 {
        value / self.limit(group)
    }

    /// Map a shared-plot-space coordinate back into `group` units, for axis
    /// tick labels.
    pub fn denormalize(&self, group: AxisGroup, plot_value: f64) -> f64 {
        plot_value * self.limit(group)
    }
}

// ---------------------------------------------------------------------------
// Nearest-sample search
// ---------------------------------------------------------------------------

/// Index of the sample closest to `x`. Linear scan; ticks are not assumed
/// sorted. `None` for empty input.
pub fn nearest_index(xs: &[f64], x: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &xi) in xs.iter().enumerate() {
        let d = (xi - x).abs();
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;

    fn dataset(series: Vec<Series>) -> TelemetryDataset {
        TelemetryDataset {
            source: "test.csv".into(),
            ticks: vec![0.0; series.first().map_or(0, |s| s.values.len())],
            series,
        }
    }

    fn series(group: AxisGroup, values: Vec<f64>) -> Series {
        Series {
            column: 0,
            label: "s".into(),
            group,
            values,
        }
    }

    #[test]
    fn limits_take_the_largest_magnitude_with_margin() {
        let ds = dataset(vec![
            series(AxisGroup::Primary, vec![3.0, -8.0, 2.0]),
            series(AxisGroup::Primary, vec![4.0, 4.0, 4.0]),
            series(AxisGroup::Secondary, vec![-0.5, 0.25, 0.0]),
        ]);
        let scales = AxisScales::from_dataset(&ds);
        assert_eq!(scales.limit(AxisGroup::Primary), 8.0 * MARGIN_FACTOR);
        assert_eq!(scales.limit(AxisGroup::Secondary), 0.5 * MARGIN_FACTOR);
    }

    #[test]
    fn empty_and_all_zero_groups_get_the_floor() {
        let ds = dataset(vec![series(AxisGroup::Tertiary, vec![0.0, 0.0])]);
        let scales = AxisScales::from_dataset(&ds);
        for group in AxisGroup::ALL {
            assert!(scales.limit(group) > 0.0);
        }
        assert_eq!(scales.limit(AxisGroup::Tertiary), MIN_RANGE);
        assert_eq!(scales.limit(AxisGroup::Quaternary), MIN_RANGE);
    }

    #[test]
    fn normalization_round_trips() {
        let ds = dataset(vec![series(AxisGroup::Primary, vec![-20.0, 10.0])]);
        let scales = AxisScales::from_dataset(&ds);
        let n = scales.normalize(AxisGroup::Primary, 10.0);
        assert!(n > 0.0 && n < 1.0);
        assert!((scales.denormalize(AxisGroup::Primary, n) - 10.0).abs() < 1e-12);
        // The largest magnitude lands inside the margin, never on the edge.
        assert!(scales.normalize(AxisGroup::Primary, -20.0) > -1.0);
    }

    #[test]
    fn nearest_index_finds_the_closest_sample() {
        let xs = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(nearest_index(&xs, -5.0), Some(0));
        assert_eq!(nearest_index(&xs, 12.0), Some(1));
        assert_eq!(nearest_index(&xs, 16.0), Some(2));
        assert_eq!(nearest_index(&xs, 99.0), Some(3));
        // Ties keep the first candidate.
        assert_eq!(nearest_index(&xs, 15.0), Some(1));
    }

    #[test]
    fn nearest_index_on_empty_input_is_none() {
        assert_eq!(nearest_index(&[], 1.0), None);
    }
}
