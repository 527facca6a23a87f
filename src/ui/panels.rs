use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::load_csv;
use crate::data::model::AxisGroup;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – interactive legend
// ---------------------------------------------------------------------------

/// Render the legend: one collapsible section per axis group with a group
/// toggle and a checkbox per series.
pub fn legend_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Legend");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for group in AxisGroup::ALL {
                let members = state.dataset.group_members(group);
                if members.is_empty() {
                    continue;
                }

                let shown = members.iter().filter(|&&i| state.is_visible(i)).count();
                let header = format!("{group}  ({shown}/{})", members.len());

                egui::CollapsingHeader::new(RichText::new(header).strong())
                    .id_salt(group)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        let hidden = state.hide_group[group.index()];
                        let toggle_label = if hidden { "Show group" } else { "Hide group" };
                        if ui.small_button(toggle_label).clicked() {
                            state.toggle_group(group);
                        }

                        for idx in members {
                            let label = legend_text(state, idx);
                            let mut checked = state.is_visible(idx);
                            if ui.checkbox(&mut checked, label).changed() {
                                state.toggle_series(idx);
                            }
                        }
                    });
            }
        });
}

/// Legend entry text: series colour, dimmed when hidden, red when selected.
fn legend_text(state: &AppState, idx: usize) -> RichText {
    let series = &state.dataset.series[idx];
    let mut text = RichText::new(&series.label);
    if state.selected == Some(idx) {
        text = text.color(Color32::RED).strong();
    } else {
        let mut color = state.colors[idx];
        if !state.is_visible(idx) {
            color = color.gamma_multiply(0.3);
        }
        text = text.color(color);
    }
    text
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} — {} series, {} ticks",
            state.dataset.source,
            state.dataset.len(),
            state.dataset.ticks.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – group toggles and the hover readout
// ---------------------------------------------------------------------------

/// Render the show/hide buttons and the value readout box.
pub fn bottom_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let all_label = if state.hide_all { "Show All" } else { "Hide All" };
        if ui.button(all_label).clicked() {
            state.toggle_all();
        }

        for group in AxisGroup::ALL {
            let hidden = state.hide_group[group.index()];
            let label = if hidden {
                format!("Show {group}")
            } else {
                format!("Hide {group}")
            };
            if ui.button(label).clicked() {
                state.toggle_group(group);
            }
        }

        ui.separator();

        egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.label(&state.readout);
        });
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open telemetry CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} with {} series over {} ticks",
                    dataset.source,
                    dataset.len(),
                    dataset.ticks.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
