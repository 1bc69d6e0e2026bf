//! Chart Application
//! Native window hosting a single chart viewer.

use crate::error::Result;
use crate::gui::icon::load_icon;
use crate::gui::ChartViewer;

/// Main application window.
pub struct ChartApp {
    viewer: ChartViewer,
}

impl ChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, viewer: ChartViewer) -> Self {
        Self { viewer }
    }

    /// Open the window and block until it is closed.
    pub fn run(viewer: ChartViewer) -> Result<()> {
        let config = viewer.config();
        let title = config.window_title.clone();

        let mut viewport = egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(&title);
        if let Some(path) = &config.icon {
            match load_icon(path) {
                Ok(icon) => viewport = viewport.with_icon(icon),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "window icon not loaded")
                }
            }
        }

        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        tracing::info!(title = %title, series = viewer.series().len(), "opening chart window");
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| Ok(Box::new(ChartApp::new(cc, viewer)))),
        )?;
        tracing::info!("chart window closed");
        Ok(())
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(ui);
        });
    }
}
