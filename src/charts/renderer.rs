//! Series Renderer
//! Turns plot requests into chart-ready series.
//!
//! A function request is sampled into `(x, y)` pairs; a point request is
//! copied as-is. The appearance flags are looked up after the series is
//! appended, so a series is never on the chart with another style.

use crate::charts::sampler::Samples;
use crate::charts::style::{appearance, Appearance, SeriesKind};
use crate::data::{FunctionRequest, PointsRequest, TrendLine};
use crate::error::Result;

/// Receives plot requests once a display surface exists.
pub trait ChartRenderer {
    fn render_function(&mut self, request: &FunctionRequest) -> Result<()>;

    fn render_points(&mut self, request: &PointsRequest) -> Result<()>;
}

/// One series as handed to the chart widget.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSeries {
    pub kind: SeriesKind,
    pub legend: String,
    pub points: Vec<[f64; 2]>,
    pub appearance: Appearance,
    /// Opaque overlays for the chart widget.
    pub trend_lines: Vec<Option<TrendLine>>,
}

/// Renderer that keeps every series in the order it was rendered.
#[derive(Debug, Default)]
pub struct SeriesRenderer {
    series: Vec<RenderedSeries>,
}

impl SeriesRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered series in chart order.
    pub fn series(&self) -> &[RenderedSeries] {
        &self.series
    }

    /// Append a series with the widget's default look.
    fn push(
        &mut self,
        kind: SeriesKind,
        legend: &str,
        points: Vec<[f64; 2]>,
    ) -> &mut RenderedSeries {
        self.series.push(RenderedSeries {
            kind,
            legend: legend.to_string(),
            points,
            appearance: Appearance::default(),
            trend_lines: Vec::new(),
        });
        let index = self.series.len() - 1;
        &mut self.series[index]
    }
}

impl ChartRenderer for SeriesRenderer {
    fn render_function(&mut self, request: &FunctionRequest) -> Result<()> {
        let points: Vec<[f64; 2]> =
            Samples::new(request.function(), request.start(), request.end())?.collect();
        tracing::debug!(
            legend = request.legend(),
            samples = points.len(),
            "function sampled"
        );

        let series = self.push(SeriesKind::Function, request.legend(), points);
        series.appearance = appearance(request.style(), SeriesKind::Function);
        Ok(())
    }

    fn render_points(&mut self, request: &PointsRequest) -> Result<()> {
        let points = request.points().collect();
        let series = self.push(SeriesKind::Points, request.legend(), points);
        series.appearance = appearance(request.style(), SeriesKind::Points);
        series.trend_lines = request.trend_lines().to_vec();
        Ok(())
    }
}
