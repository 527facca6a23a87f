use std::fmt;

// ---------------------------------------------------------------------------
// AxisGroup – which of the four y-axes a column is drawn on
// ---------------------------------------------------------------------------

/// One of the four overlaid y-axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisGroup {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

impl AxisGroup {
    pub const ALL: [AxisGroup; 4] = [
        AxisGroup::Primary,
        AxisGroup::Secondary,
        AxisGroup::Tertiary,
        AxisGroup::Quaternary,
    ];

    /// Index into per-group arrays (limits, hide flags).
    pub fn index(self) -> usize {
        match self {
            AxisGroup::Primary => 0,
            AxisGroup::Secondary => 1,
            AxisGroup::Tertiary => 2,
            AxisGroup::Quaternary => 3,
        }
    }
}

impl fmt::Display for AxisGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisGroup::Primary => "Primary",
            AxisGroup::Secondary => "Secondary",
            AxisGroup::Tertiary => "Tertiary",
            AxisGroup::Quaternary => "Quaternary",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Column classification by header suffix
// ---------------------------------------------------------------------------

/// What a header's `:N` suffix says about the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    /// `:0` – never plotted.
    Ignore,
    /// Plotted on the given axis.
    Axis(AxisGroup),
}

/// Classify a column header by its suffix: `:0` ignore, `:2`/`:3`/`:4`
/// secondary/tertiary/quaternary, anything else primary.
pub fn classify_column(header: &str) -> ColumnClass {
    if header.ends_with(":0") {
        ColumnClass::Ignore
    } else if header.ends_with(":2") {
        ColumnClass::Axis(AxisGroup::Secondary)
    } else if header.ends_with(":3") {
        ColumnClass::Axis(AxisGroup::Tertiary)
    } else if header.ends_with(":4") {
        ColumnClass::Axis(AxisGroup::Quaternary)
    } else {
        ColumnClass::Axis(AxisGroup::Primary)
    }
}

/// Header with the trailing `:N` axis suffix stripped, for display.
pub fn display_label(header: &str) -> &str {
    match header.rsplit_once(':') {
        Some((name, _)) => name,
        None => header,
    }
}

/// Unit suffix for the hover readout, keyed on the display label.
/// Unknown signals get no unit.
pub fn unit_suffix(label: &str) -> Option<&'static str> {
    match label {
        "currentPosition" | "targetPosition" => Some("m°"),
        "currentSpeed" | "targetSpeed" => Some("m°/s"),
        "output" => Some("% Duty Cycle"),
        "current" => Some("mA"),
        _ => None,
    }
}

/// Readout line for a sample of a named series. Values are truncated to
/// whole units.
pub fn format_readout(label: &str, value: f64) -> String {
    match unit_suffix(label) {
        Some(unit) => format!("Line: {label}\nValue: {} {unit}", value as i64),
        None => format!("Line: {label}\nValue: {}", value as i64),
    }
}

// ---------------------------------------------------------------------------
// Series – one plotted column
// ---------------------------------------------------------------------------

/// A single telemetry signal (one kept CSV column).
#[derive(Debug, Clone)]
pub struct Series {
    /// Zero-based column index in the source CSV.
    pub column: usize,
    /// Header with the axis suffix stripped.
    pub label: String,
    /// Which y-axis this series is drawn on.
    pub group: AxisGroup,
    /// Sample values – same length as the dataset's `ticks`.
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// TelemetryDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed CSV: the shared tick axis plus all kept series.
#[derive(Debug, Clone)]
pub struct TelemetryDataset {
    /// File name shown in the UI.
    pub source: String,
    /// Shared x-axis (second CSV column), milliseconds.
    pub ticks: Vec<f64>,
    /// Kept series in CSV column order.
    pub series: Vec<Series>,
}

impl TelemetryDataset {
    /// Indices into `series` belonging to one axis group.
    pub fn group_members(&self, group: AxisGroup) -> Vec<usize> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.group == group)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of kept series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether any series survived classification.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_route_to_their_axes() {
        assert_eq!(classify_column("flags:0"), ColumnClass::Ignore);
        assert_eq!(
            classify_column("currentSpeed:2"),
            ColumnClass::Axis(AxisGroup::Secondary)
        );
        assert_eq!(
            classify_column("output:3"),
            ColumnClass::Axis(AxisGroup::Tertiary)
        );
        assert_eq!(
            classify_column("current:4"),
            ColumnClass::Axis(AxisGroup::Quaternary)
        );
        assert_eq!(
            classify_column("currentPosition"),
            ColumnClass::Axis(AxisGroup::Primary)
        );
        // Unknown suffix digits fall through to primary.
        assert_eq!(
            classify_column("weird:7"),
            ColumnClass::Axis(AxisGroup::Primary)
        );
    }

    #[test]
    fn classification_partitions_every_column() {
        let headers = [
            "timestamp:0",
            "tick",
            "currentPosition",
            "targetSpeed:2",
            "pTerm:3",
            "current:4",
        ];
        let mut buckets = [0usize; 5];
        for h in headers {
            match classify_column(h) {
                ColumnClass::Ignore => buckets[4] += 1,
                ColumnClass::Axis(g) => buckets[g.index()] += 1,
            }
        }
        assert_eq!(buckets.iter().sum::<usize>(), headers.len());
        assert_eq!(buckets, [2, 1, 1, 1, 1]);
    }

    #[test]
    fn display_label_strips_only_the_suffix() {
        assert_eq!(display_label("currentSpeed:2"), "currentSpeed");
        assert_eq!(display_label("tick"), "tick");
        // Only the last colon-delimited token is treated as the suffix.
        assert_eq!(display_label("ns:currentSpeed:2"), "ns:currentSpeed");
    }

    #[test]
    fn readout_uses_known_unit_suffixes() {
        assert_eq!(
            format_readout("currentPosition", 90250.7),
            "Line: currentPosition\nValue: 90250 m°"
        );
        assert_eq!(
            format_readout("output", -12.9),
            "Line: output\nValue: -12 % Duty Cycle"
        );
        assert_eq!(format_readout("pTerm", 3.2), "Line: pTerm\nValue: 3");
    }

    #[test]
    fn group_members_partition_the_series_set() {
        let ds = TelemetryDataset {
            source: "test.csv".into(),
            ticks: vec![0.0, 1.0],
            series: vec![
                Series {
                    column: 2,
                    label: "a".into(),
                    group: AxisGroup::Primary,
                    values: vec![1.0, 2.0],
                },
                Series {
                    column: 3,
                    label: "b".into(),
                    group: AxisGroup::Secondary,
                    values: vec![1.0, 2.0],
                },
                Series {
                    column: 4,
                    label: "c".into(),
                    group: AxisGroup::Primary,
                    values: vec![1.0, 2.0],
                },
            ],
        };
        assert_eq!(ds.group_members(AxisGroup::Primary), vec![0, 2]);
        assert_eq!(ds.group_members(AxisGroup::Secondary), vec![1]);
        assert!(ds.group_members(AxisGroup::Tertiary).is_empty());
        let total: usize = AxisGroup::ALL
            .iter()
            .map(|&g| ds.group_members(g).len())
            .sum();
        assert_eq!(total, ds.len());
    }
}
