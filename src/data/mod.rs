/// Data layer: core types, loading, and axis scaling.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TelemetryDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ TelemetryDataset │  ticks + Vec<Series>, axis groups
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  scale    │  symmetric per-axis limits → shared plot space
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod scale;
