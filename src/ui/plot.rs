use eframe::egui::{Pos2, Ui};
use egui_plot::{AxisHints, HPlacement, Line, LineStyle, Plot, PlotPoint, PlotPoints, PlotTransform};

use crate::data::model::{format_readout, AxisGroup};
use crate::data::scale::nearest_index;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Telemetry plot (central panel)
// ---------------------------------------------------------------------------

/// Render the telemetry plot and resolve click / hover interaction.
pub fn telemetry_plot(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No plottable columns in this file");
        });
        return;
    }

    let response = Plot::new("telemetry_plot")
        .x_axis_label("Tick (Milliseconds)")
        .custom_y_axes(y_axes(state))
        .include_y(-1.0)
        .include_y(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, series) in state.dataset.series.iter().enumerate() {
                if !state.is_visible(idx) {
                    continue;
                }

                let points: PlotPoints = state
                    .dataset
                    .ticks
                    .iter()
                    .zip(series.values.iter())
                    .map(|(&x, &y)| [x, state.scales.normalize(series.group, y)])
                    .collect();

                let width = if state.selected == Some(idx) { 3.0 } else { 1.5 };
                let line = Line::new(points)
                    .name(&series.label)
                    .color(state.colors[idx])
                    .style(group_style(series.group))
                    .width(width);

                plot_ui.line(line);
            }
        });

    // Click: select the visible line nearest the pointer in screen space.
    if response.response.clicked() {
        if let Some(screen_pos) = response.response.interact_pointer_pos() {
            let plot_pos = response.transform.value_from_position(screen_pos);
            match nearest_series(state, &response.transform, plot_pos.x, screen_pos) {
                Some(idx) => state.click_select(idx),
                // Nothing visible to hit; keep the session going.
                None => log::debug!("plot click with no visible lines"),
            }
        }
    }

    // Hover: follow the selected line while the pointer is over the plot.
    if let Some(sel) = state.selected_visible() {
        if let Some(hover_pos) = response.response.hover_pos() {
            let plot_x = response.transform.value_from_position(hover_pos).x;
            let series = &state.dataset.series[sel];
            if let Some(i) = nearest_index(&state.dataset.ticks, plot_x) {
                state.readout = format_readout(&series.label, series.values[i]);
            } else {
                log::warn!("selected series '{}' has no samples", series.label);
            }
        }
    }
}

/// Primary and secondary axes on the left, tertiary and quaternary on the
/// right. Each formatter maps the shared `[-1, 1]` plot space back into the
/// group's own units.
fn y_axes(state: &AppState) -> Vec<AxisHints<'static>> {
    let axis = |group: AxisGroup, placement: HPlacement, label: &str| {
        let limit = state.scales.limit(group);
        AxisHints::new_y()
            .label(label.to_string())
            .placement(placement)
            .formatter(move |mark, _range| format_axis_value(mark.value * limit))
    };

    vec![
        axis(AxisGroup::Primary, HPlacement::Left, "Primary Axis Values"),
        axis(AxisGroup::Secondary, HPlacement::Left, "Secondary Axis Values"),
        axis(AxisGroup::Tertiary, HPlacement::Right, "Tertiary Axis Values"),
        axis(
            AxisGroup::Quaternary,
            HPlacement::Right,
            "Quaternary Axis Values",
        ),
    ]
}

/// Plain (non-scientific) tick labels, with decimals only for small ranges.
fn format_axis_value(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else if value.abs() >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Line style per axis group, so overlapping axes stay tellable apart.
fn group_style(group: AxisGroup) -> LineStyle {
    match group {
        AxisGroup::Secondary => LineStyle::Dotted { spacing: 4.0 },
        AxisGroup::Tertiary => LineStyle::Dashed { length: 8.0 },
        AxisGroup::Primary | AxisGroup::Quaternary => LineStyle::Solid,
    }
}

/// The visible series whose nearest-x sample lies closest to the click in
/// screen pixels. Screen distance makes the pick fair across axis groups
/// with wildly different value ranges.
fn nearest_series(
    state: &AppState,
    transform: &PlotTransform,
    plot_x: f64,
    click: Pos2,
) -> Option<usize> {
    let i = nearest_index(&state.dataset.ticks, plot_x)?;
    let mut best: Option<(usize, f32)> = None;

    for (idx, series) in state.dataset.series.iter().enumerate() {
        if !state.is_visible(idx) {
            continue;
        }
        let point = PlotPoint::new(
            state.dataset.ticks[i],
            state.scales.normalize(series.group, series.values[i]),
        );
        let screen = transform.position_from_point(&point);
        let d2 = screen.distance_sq(click);
        if best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((idx, d2));
        }
    }

    best.map(|(idx, _)| idx)
}
