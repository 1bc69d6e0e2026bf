//! Plot Model Module
//! Buffers plot requests until a renderer exists, then replays them.

use crate::charts::ChartRenderer;
use crate::data::request::{FunctionPlot, FunctionRequest, PointsPlot, PointsRequest};
use crate::error::{PlotError, Result};

/// Where requests go once validated.
enum Surface<R> {
    /// No renderer yet; requests are only stored.
    Pending,
    /// Requests are stored and forwarded.
    Attached(R),
}

/// Ordered store of every plot request, bound at most once to a renderer.
///
/// Function and point requests are kept as two independent sequences.
/// On [`attach`](PlotModel::attach) all functions are replayed first, then
/// all point sets, each in insertion order.
pub struct PlotModel<R> {
    functions: Vec<FunctionRequest>,
    points: Vec<PointsRequest>,
    surface: Surface<R>,
}

impl<R> Default for PlotModel<R> {
    fn default() -> Self {
        Self {
            functions: Vec::new(),
            points: Vec::new(),
            surface: Surface::Pending,
        }
    }
}

impl<R: ChartRenderer> PlotModel<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a function plot, rendering it now if attached.
    pub fn add_function_plot(&mut self, plot: FunctionPlot) -> Result<()> {
        let request = plot.validate()?;
        tracing::debug!(
            legend = request.legend(),
            start = request.start(),
            end = request.end(),
            "function plot added"
        );
        self.functions.push(request);
        if let (Surface::Attached(renderer), Some(request)) =
            (&mut self.surface, self.functions.last())
        {
            renderer.render_function(request)?;
        }
        Ok(())
    }

    /// Validate and record a point-set plot, rendering it now if attached.
    pub fn add_points_plot(&mut self, plot: PointsPlot) -> Result<()> {
        let request = plot.validate()?;
        tracing::debug!(
            legend = request.legend(),
            len = request.xs().len(),
            "points plot added"
        );
        self.points.push(request);
        if let (Surface::Attached(renderer), Some(request)) =
            (&mut self.surface, self.points.last())
        {
            renderer.render_points(request)?;
        }
        Ok(())
    }

    /// Bind the renderer and replay every stored request through it.
    ///
    /// The renderer stays attached even when a replayed request fails; the
    /// first failure stops the replay and is returned.
    pub fn attach(&mut self, mut renderer: R) -> Result<()> {
        if self.is_attached() {
            return Err(PlotError::AlreadyAttached);
        }
        tracing::debug!(
            functions = self.functions.len(),
            points = self.points.len(),
            "renderer attached, replaying buffered plots"
        );
        let replayed = self.replay(&mut renderer);
        self.surface = Surface::Attached(renderer);
        replayed
    }

    fn replay(&self, renderer: &mut R) -> Result<()> {
        for request in &self.functions {
            renderer.render_function(request)?;
        }
        for request in &self.points {
            renderer.render_points(request)?;
        }
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.surface, Surface::Attached(_))
    }

    pub fn renderer(&self) -> Option<&R> {
        match &self.surface {
            Surface::Attached(renderer) => Some(renderer),
            Surface::Pending => None,
        }
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        match &mut self.surface {
            Surface::Attached(renderer) => Some(renderer),
            Surface::Pending => None,
        }
    }
}
