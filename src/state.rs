use eframe::egui::Color32;

use crate::color::series_colors;
use crate::data::model::{AxisGroup, TelemetryDataset};
use crate::data::scale::AxisScales;

/// Readout text while no line is selected.
pub const IDLE_READOUT: &str = "Click a line to view data";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. All interaction flags live
/// here as plain fields rather than in widget closures.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: TelemetryDataset,

    /// Symmetric per-axis half-ranges for the current dataset.
    pub scales: AxisScales,

    /// One colour per series, parallel to `dataset.series`.
    pub colors: Vec<Color32>,

    /// Per-series visibility, parallel to `dataset.series`.
    pub visible: Vec<bool>,

    /// The at-most-one series the hover readout follows.
    pub selected: Option<usize>,

    /// Per-group "Hide <group>" button state, indexed by `AxisGroup::index`.
    pub hide_group: [bool; 4],

    /// "Hide All" button state.
    pub hide_all: bool,

    /// Hover readout text, rewritten by the plot every frame.
    pub readout: String,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: TelemetryDataset) -> Self {
        let scales = AxisScales::from_dataset(&dataset);
        let colors = series_colors(&dataset);
        let visible = vec![true; dataset.len()];
        Self {
            dataset,
            scales,
            colors,
            visible,
            selected: None,
            hide_group: [false; 4],
            hide_all: false,
            readout: IDLE_READOUT.to_string(),
            status_message: None,
        }
    }

    /// Replace the dataset (File → Open…), resetting all interaction state.
    pub fn set_dataset(&mut self, dataset: TelemetryDataset) {
        *self = AppState::new(dataset);
    }

    /// Whether a series is currently drawn.
    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible.get(idx).copied().unwrap_or(false)
    }

    /// Flip the visibility of one series (legend checkbox).
    pub fn toggle_series(&mut self, idx: usize) {
        if let Some(v) = self.visible.get_mut(idx) {
            *v = !*v;
        }
    }

    /// Flip a whole axis group. Forces every member's visibility so the
    /// group ends up uniform even if single series were toggled before.
    pub fn toggle_group(&mut self, group: AxisGroup) {
        let hidden = &mut self.hide_group[group.index()];
        *hidden = !*hidden;
        let show = !*hidden;
        for idx in self.dataset.group_members(group) {
            self.visible[idx] = show;
        }
    }

    /// The "Hide All" button: cascades to every group whose state is out of
    /// line with the new global state.
    pub fn toggle_all(&mut self) {
        self.hide_all = !self.hide_all;
        for group in AxisGroup::ALL {
            if self.hide_group[group.index()] != self.hide_all {
                self.toggle_group(group);
            }
        }
    }

    /// Click on the plot resolved to a series: clicking the selected line
    /// again deselects it and clears the readout.
    pub fn click_select(&mut self, idx: usize) {
        if self.selected == Some(idx) {
            self.selected = None;
            self.readout = IDLE_READOUT.to_string();
        } else {
            self.selected = Some(idx);
        }
    }

    /// The selected series, provided it is still visible.
    pub fn selected_visible(&self) -> Option<usize> {
        self.selected.filter(|&idx| self.is_visible(idx))
    }
}

// ---------------------------------------------------------------------------
