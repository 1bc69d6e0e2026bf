//! Embedding API: collect plots, set titles, then display them in a window.

use crate::charts::SeriesRenderer;
use crate::config::ChartConfig;
use crate::data::{Function, FunctionPlot, PlotModel, PointsPlot, Style, TrendLine};
use crate::error::Result;
use crate::gui::{ChartApp, ChartViewer};

/// A chart under construction.
///
/// ```no_run
/// use funcplot::Chart;
///
/// let mut chart = Chart::new();
/// chart.set_chart_title("Sine");
/// chart.plot_function(f64::sin, 0.0, 2.0 * std::f64::consts::PI, "sin(x)")?;
/// chart.display()?;
/// # Ok::<(), funcplot::PlotError>(())
/// ```
#[derive(Default)]
pub struct Chart {
    config: ChartConfig,
    model: PlotModel<SeriesRenderer>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            config,
            model: PlotModel::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_window_title(&mut self, title: impl Into<String>) {
        self.config.window_title = title.into();
    }

    pub fn set_chart_title(&mut self, title: impl Into<String>) {
        self.config.chart_title = Some(title.into());
    }

    pub fn set_axis_x_title(&mut self, title: impl Into<String>) {
        self.config.x_axis_title = Some(title.into());
    }

    pub fn set_axis_y_title(&mut self, title: impl Into<String>) {
        self.config.y_axis_title = Some(title.into());
    }

    pub fn add_function_plot(&mut self, plot: FunctionPlot) -> Result<()> {
        self.model.add_function_plot(plot)
    }

    /// Plot `function` over `[start, end]` with [`Style::Line`].
    pub fn plot_function(
        &mut self,
        function: impl Function + 'static,
        start: f64,
        end: f64,
        legend: impl Into<String>,
    ) -> Result<()> {
        self.add_function_plot(FunctionPlot::new(function, start, end, legend))
    }

    pub fn plot_function_styled(
        &mut self,
        function: impl Function + 'static,
        start: f64,
        end: f64,
        legend: impl Into<String>,
        style: Style,
    ) -> Result<()> {
        self.add_function_plot(FunctionPlot::new(function, start, end, legend).style(style))
    }

    pub fn add_points_plot(&mut self, plot: PointsPlot) -> Result<()> {
        self.model.add_points_plot(plot)
    }

    /// Plot a point set with [`Style::LineAndMarker`] and a single empty trend-line slot.
    pub fn plot_points(
        &mut self,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        legend: impl Into<String>,
    ) -> Result<()> {
        self.plot_points_styled(xs, ys, legend, Style::LineAndMarker)
    }

    /// Plot a point set with `style` and a single empty trend-line slot.
    pub fn plot_points_styled(
        &mut self,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        legend: impl Into<String>,
        style: Style,
    ) -> Result<()> {
        self.add_points_plot(
            PointsPlot::new(xs, ys, legend)
                .style(style)
                .trend_line(None::<TrendLine>),
        )
    }

    /// Plot a point set with [`Style::LineAndMarker`] and trend-line overlays.
    pub fn plot_points_with_trends<I>(
        &mut self,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        legend: impl Into<String>,
        trend_lines: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Option<TrendLine>>,
    {
        self.add_points_plot(PointsPlot::new(xs, ys, legend).trend_lines(trend_lines))
    }

    /// Attach a renderer and hand the chart over as an embeddable widget.
    pub fn into_viewer(self) -> Result<ChartViewer> {
        ChartViewer::new(self.config, self.model)
    }

    /// Show the chart in a native window. Blocks until the window closes.
    pub fn display(self) -> Result<()> {
        let viewer = self.into_viewer()?;
        ChartApp::run(viewer)
    }
}
