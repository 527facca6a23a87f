use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{classify_column, display_label, ColumnClass, Series, TelemetryDataset};

// ---------------------------------------------------------------------------
// Structural CSV faults
// ---------------------------------------------------------------------------

/// Ways a syntactically readable CSV can still be unusable as telemetry.
#[derive(Debug, Error)]
pub enum CsvShapeError {
    #[error("need at least 2 columns (tick plus one signal), got {0}")]
    TooFewColumns(usize),
    #[error("file contains a header but no data rows")]
    NoRows,
    #[error("row {row}: expected {expected} fields, got {got}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a telemetry CSV from disk.
///
/// Layout: header row with column names; the second column is the shared
/// tick axis, every other column is a candidate series routed to an axis
/// group by its `:N` header suffix (`:0` columns are dropped here).
pub fn load_csv(path: &Path) -> Result<TelemetryDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("telemetry")
        .to_string();

    let dataset = read_csv(file, source)
        .with_context(|| format!("reading {}", path.display()))?;

    log_partition(&dataset);
    Ok(dataset)
}

/// Parse telemetry CSV from any reader. Split out from [`load_csv`] so
/// tests can feed in-memory input.
pub fn read_csv<R: Read>(input: R, source: String) -> Result<TelemetryDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < 2 {
        return Err(CsvShapeError::TooFewColumns(headers.len()).into());
    }

    // Column 1 is always the tick axis; classify the rest.
    const TICK_COLUMN: usize = 1;
    let mut kept: Vec<(usize, String)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == TICK_COLUMN {
            continue;
        }
        if classify_column(header) != ColumnClass::Ignore {
            kept.push((idx, header.clone()));
        }
    }

    let mut ticks: Vec<f64> = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); kept.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != headers.len() {
            return Err(CsvShapeError::RaggedRow {
                row: row_no,
                expected: headers.len(),
                got: record.len(),
            }
            .into());
        }

        ticks.push(parse_cell(&record, TICK_COLUMN, &headers, row_no)?);
        for (slot, &(idx, _)) in columns.iter_mut().zip(kept.iter()) {
            slot.push(parse_cell(&record, idx, &headers, row_no)?);
        }
    }

    if ticks.is_empty() {
        return Err(CsvShapeError::NoRows.into());
    }

    let series = kept
        .into_iter()
        .zip(columns)
        .map(|((column, header), values)| {
            let group = match classify_column(&header) {
                ColumnClass::Axis(g) => g,
                // :0 columns were filtered above.
                ColumnClass::Ignore => unreachable!(),
            };
            Series {
                column,
                label: display_label(&header).trim().to_string(),
                group,
                values,
            }
        })
        .collect();

    Ok(TelemetryDataset {
        source,
        ticks,
        series,
    })
}

fn parse_cell(
    record: &csv::StringRecord,
    idx: usize,
    headers: &[String],
    row_no: usize,
) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim().parse::<f64>().map_err(|_| {
        CsvShapeError::NonNumeric {
            row: row_no,
            column: headers[idx].clone(),
            value: raw.to_string(),
        }
        .into()
    })
}

/// Log which CSV column indices landed on which axis.
fn log_partition(dataset: &TelemetryDataset) {
    for group in super::model::AxisGroup::ALL {
        let cols: Vec<usize> = dataset
            .series
            .iter()
            .filter(|s| s.group == group)
            .map(|s| s.column)
            .collect();
        log::info!("{group} columns: {cols:?}");
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AxisGroup;

    fn load(text: &str) -> Result<TelemetryDataset> {
        read_csv(text.as_bytes(), "test.csv".into())
    }

    #[test]
    fn well_formed_file_loads() {
        let ds = load(
            "run:0,tick,currentPosition,currentSpeed:2,pTerm:3,current:4\n\
             1,0,100,5,0.5,250\n\
             1,10,110,6,0.4,260\n",
        )
        .unwrap();

        assert_eq!(ds.ticks, vec![0.0, 10.0]);
        // run:0 is dropped, tick is the x-axis, four series remain.
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.series[0].label, "currentPosition");
        assert_eq!(ds.series[0].group, AxisGroup::Primary);
        assert_eq!(ds.series[0].column, 2);
        assert_eq!(ds.series[1].group, AxisGroup::Secondary);
        assert_eq!(ds.series[2].group, AxisGroup::Tertiary);
        assert_eq!(ds.series[3].group, AxisGroup::Quaternary);
        assert_eq!(ds.series[3].values, vec![250.0, 260.0]);
    }

    #[test]
    fn every_series_matches_tick_length() {
        let ds = load(
            "a:0,tick,x,y:2\n\
             0,0,1,2\n\
             0,1,3,4\n\
             0,2,5,6\n",
        )
        .unwrap();
        for s in &ds.series {
            assert_eq!(s.values.len(), ds.ticks.len());
        }
    }

    #[test]
    fn single_column_is_rejected() {
        let err = load("tick\n1\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CsvShapeError>(),
            Some(CsvShapeError::TooFewColumns(1))
        ));
    }

    #[test]
    fn header_only_file_is_rejected() {
        let err = load("run:0,tick,x\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CsvShapeError>(),
            Some(CsvShapeError::NoRows)
        ));
    }

    #[test]
    fn ragged_row_is_rejected() {
        let err = load("run:0,tick,x\n1,0,5\n1,10\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CsvShapeError>(),
            Some(CsvShapeError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let err = load("run:0,tick,x\n1,0,five\n").unwrap_err();
        match err.downcast_ref::<CsvShapeError>() {
            Some(CsvShapeError::NonNumeric { row, column, value }) => {
                assert_eq!(*row, 0);
                assert_eq!(column, "x");
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ignored_columns_never_become_series() {
        let ds = load("skipA:0,tick,x,skipB:0\n0,0,1,9\n").unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.series[0].label, "x");
    }
}
