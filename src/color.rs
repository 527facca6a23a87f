use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::TelemetryDataset;

// ---------------------------------------------------------------------------
// Fixed colour table
// ---------------------------------------------------------------------------

/// Colour for a known CSV column index. The table pairs related signals
/// (current/target position and speed share hues, the two error/integral
/// pairs share hues) so related lines read together on the plot.
pub fn fixed_color(column: usize) -> Option<Color32> {
    let c = match column {
        2 => Color32::from_rgb(0xff, 0x7f, 0x0e),  // Orange - Current Position
        3 => Color32::from_rgb(0x2c, 0xa0, 0x2c),  // Green - Target Position
        4 => Color32::from_rgb(0xff, 0x7f, 0x0e),  // Orange - Current Speed
        5 => Color32::from_rgb(0x2c, 0xa0, 0x2c),  // Green - Target Speed
        6 => Color32::from_rgb(0xd6, 0x27, 0x28),  // Red - Error
        7 => Color32::from_rgb(0x17, 0xbe, 0xcf),  // Light Blue - Integral
        9 => Color32::from_rgb(0xd6, 0x27, 0x28),  // Red - Speed Error
        10 => Color32::from_rgb(0x17, 0xbe, 0xcf), // Light Blue - Integral Speed
        12 => Color32::from_rgb(0x6b, 0x6e, 0xcf), // Purple - P Term
        13 => Color32::from_rgb(0xb5, 0xcf, 0x6b), // Green - I Term
        14 => Color32::from_rgb(0xe7, 0xba, 0x52), // Gold - D Term
        15 => Color32::from_rgb(0xce, 0x6d, 0xbd), // Pink - F Term
        16 => Color32::from_rgb(0x6b, 0xae, 0xd6), // Blue - P Speed Term
        17 => Color32::from_rgb(0xfd, 0x8d, 0x3c), // Orange - I Speed Term
        18 => Color32::from_rgb(0x74, 0xc4, 0x76), // Green - D Speed Term
        19 => Color32::from_rgb(0xa6, 0x56, 0x28), // Brown - Output
        20 => Color32::from_rgb(0xe7, 0x29, 0x8a), // Purple - Current
        _ => return None,
    };
    Some(c)
}

// ---------------------------------------------------------------------------
// Fallback palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One colour per series: the fixed table by CSV column index, with
/// generated hues for columns the table does not cover.
pub fn series_colors(dataset: &TelemetryDataset) -> Vec<Color32> {
    let unmapped = dataset
        .series
        .iter()
        .filter(|s| fixed_color(s.column).is_none())
        .count();
    let mut fallback = generate_palette(unmapped).into_iter();

    dataset
        .series
        .iter()
        .map(|s| {
            fixed_color(s.column)
                .or_else(|| fallback.next())
                .unwrap_or(Color32::GRAY)
        })
        .collect()
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AxisGroup, Series, TelemetryDataset};

    #[test]
    fn palette_sizes_match() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn mapped_columns_keep_their_table_colour() {
        let ds = TelemetryDataset {
            source: "t.csv".into(),
            ticks: vec![0.0],
            series: vec![
                Series {
                    column: 2,
                    label: "currentPosition".into(),
                    group: AxisGroup::Primary,
                    values: vec![0.0],
                },
                Series {
                    column: 42,
                    label: "extra".into(),
                    group: AxisGroup::Primary,
                    values: vec![0.0],
                },
            ],
        };
        let colors = series_colors(&ds);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], fixed_color(2).unwrap());
        assert_ne!(colors[1], colors[0]);
    }
}
