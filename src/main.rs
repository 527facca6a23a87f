mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::TickPlotApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let path = match parse_args(std::env::args().skip(1)) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let dataset = match data::loader::load_csv(&path) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error reading {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };

    let title = format!("Tickplot – {}", dataset.source);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1700.0, 950.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(TickPlotApp::new(dataset)))),
    )
}

/// Exactly one positional argument: the telemetry CSV path.
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<PathBuf, String> {
    let path = args
        .next()
        .ok_or_else(|| "usage: tickplot <telemetry.csv>".to_string())?;
    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument '{extra}'\nusage: tickplot <telemetry.csv>"));
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    #[test]
    fn one_argument_is_the_csv_path() {
        let path = parse_args(["run.csv".to_string()].into_iter()).unwrap();
        assert_eq!(path, std::path::PathBuf::from("run.csv"));
    }

    #[test]
    fn missing_argument_is_an_error() {
        assert!(parse_args(std::iter::empty()).is_err());
    }

    #[test]
    fn extra_arguments_are_an_error() {
        let err = parse_args(["a.csv".to_string(), "b.csv".to_string()].into_iter()).unwrap_err();
        assert!(err.contains("b.csv"));
    }
}
