use eframe::egui;

use crate::data::model::TelemetryDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TickPlotApp {
    pub state: AppState,
}

impl TickPlotApp {
    pub fn new(dataset: TelemetryDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for TickPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: toggles + readout ----
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            panels::bottom_bar(ui, &mut self.state);
        });

        // ---- Left side panel: legend ----
        egui::SidePanel::left("legend_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::legend_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::telemetry_plot(ui, &mut self.state);
        });
    }
}
