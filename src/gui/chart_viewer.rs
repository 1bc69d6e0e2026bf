//! Chart Viewer Widget
//! Central chart area: optional title heading above an egui_plot line chart.

use crate::charts::{AxisLabels, ChartPlotter, RenderedSeries, SeriesRenderer};
use crate::config::ChartConfig;
use crate::data::PlotModel;
use crate::error::Result;
use egui::RichText;

const CHART_ID: &str = "funcplot_chart";
const TITLE_SIZE: f32 = 18.0;

/// Displays every plotted series of one chart.
///
/// Owns the plot model with its renderer attached, so plots added through
/// [`model_mut`](ChartViewer::model_mut) show up on the next frame.
pub struct ChartViewer {
    config: ChartConfig,
    model: PlotModel<SeriesRenderer>,
}

impl ChartViewer {
    /// Attach a renderer to `model`, replaying its buffered plots.
    pub fn new(config: ChartConfig, mut model: PlotModel<SeriesRenderer>) -> Result<Self> {
        model.attach(SeriesRenderer::new())?;
        Ok(Self { config, model })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    pub fn model_mut(&mut self) -> &mut PlotModel<SeriesRenderer> {
        &mut self.model
    }

    /// Series currently on the chart.
    pub fn series(&self) -> &[RenderedSeries] {
        self.model
            .renderer()
            .map(SeriesRenderer::series)
            .unwrap_or_default()
    }

    /// Draw the chart
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(title) = &self.config.chart_title {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(TITLE_SIZE).strong());
            });
            ui.add_space(8.0);
        }

        let labels = AxisLabels {
            x: self.config.x_axis_title.as_deref(),
            y: self.config.y_axis_title.as_deref(),
        };
        ChartPlotter::draw_line_chart(ui, CHART_ID, labels, self.series());
    }
}
