//! Plot Request Module
//! Functions, styles and the two kinds of plot request (sampled function or point set).

use crate::error::{EvalError, PlotError, Result};
use std::fmt;

/// A real function of one real variable.
///
/// Closures `Fn(f64) -> f64` are functions that never fail. Wrap closures
/// returning `Result` with [`fallible`] so their errors become [`EvalError`].
pub trait Function {
    fn eval(&self, x: f64) -> std::result::Result<f64, EvalError>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> std::result::Result<f64, EvalError> {
        Ok(self(x))
    }
}

/// Adapter produced by [`fallible`].
pub struct Fallible<F>(F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> std::result::Result<f64, E>,
    E: fmt::Display,
{
    fn eval(&self, x: f64) -> std::result::Result<f64, EvalError> {
        (self.0)(x).map_err(|e| EvalError::new(e.to_string()))
    }
}

/// Turn a closure that may fail into a [`Function`].
///
/// ```
/// use funcplot::{fallible, EvalError, Function};
///
/// let sqrt = fallible(|x: f64| {
///     if x < 0.0 {
///         Err(EvalError::new("negative input"))
///     } else {
///         Ok(x.sqrt())
///     }
/// });
/// assert_eq!(sqrt.eval(4.0), Ok(2.0));
/// assert!(sqrt.eval(-1.0).is_err());
/// ```
pub fn fallible<F, E>(function: F) -> Fallible<F>
where
    F: Fn(f64) -> std::result::Result<f64, E>,
    E: fmt::Display,
{
    Fallible(function)
}

/// Series rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Connecting line only, no markers.
    Line,
    /// Markers only, no connecting line.
    Marker,
    /// Both markers and connecting line.
    LineAndMarker,
}

/// Regression kind of a trend line overlay.
///
/// Carried with point series for the chart widget; nothing is computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendLine {
    Linear,
    Exponential,
    Logarithmic,
    Polynomial { degree: u8 },
    Power,
    MovingAverage { period: u16 },
}

/// Unvalidated function plot, as assembled by the caller.
pub struct FunctionPlot {
    function: Option<Box<dyn Function>>,
    start: f64,
    end: f64,
    legend: String,
    style: Option<Style>,
}

impl Default for FunctionPlot {
    fn default() -> Self {
        Self {
            function: None,
            start: 0.0,
            end: 0.0,
            legend: String::new(),
            style: Some(Style::Line),
        }
    }
}

impl FunctionPlot {
    /// Plot `function` over `[start, end]` with the default [`Style::Line`].
    pub fn new(
        function: impl Function + 'static,
        start: f64,
        end: f64,
        legend: impl Into<String>,
    ) -> Self {
        Self::default()
            .function(function)
            .interval(start, end)
            .legend(legend)
    }

    pub fn function(mut self, function: impl Function + 'static) -> Self {
        self.function = Some(Box::new(function));
        self
    }

    pub fn interval(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = legend.into();
        self
    }

    /// Set the style; `None` leaves the plot without one and fails validation.
    pub fn style(mut self, style: impl Into<Option<Style>>) -> Self {
        self.style = style.into();
        self
    }

    /// Check required fields. Nothing is recorded when this fails.
    pub fn validate(self) -> Result<FunctionRequest> {
        let function = self.function.ok_or(PlotError::NullArgument("function"))?;
        let style = self.style.ok_or(PlotError::NullArgument("style"))?;
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(PlotError::invalid_argument(format!(
                "interval bounds must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        Ok(FunctionRequest {
            function,
            start: self.start,
            end: self.end,
            legend: self.legend,
            style,
        })
    }
}

impl fmt::Debug for FunctionPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPlot")
            .field("has_function", &self.function.is_some())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("legend", &self.legend)
            .field("style", &self.style)
            .finish()
    }
}

/// Validated request to sample and plot a function.
pub struct FunctionRequest {
    function: Box<dyn Function>,
    start: f64,
    end: f64,
    legend: String,
    style: Style,
}

impl FunctionRequest {
    pub fn function(&self) -> &dyn Function {
        self.function.as_ref()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    /// Style the caller asked for. Function series are drawn the same way regardless.
    pub fn style(&self) -> Style {
        self.style
    }
}

impl fmt::Debug for FunctionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRequest")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("legend", &self.legend)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Unvalidated point-set plot.
#[derive(Debug, Clone)]
pub struct PointsPlot {
    xs: Vec<f64>,
    ys: Vec<f64>,
    legend: String,
    style: Option<Style>,
    trend_lines: Vec<Option<TrendLine>>,
}

impl PointsPlot {
    /// Plot paired coordinates with the default [`Style::LineAndMarker`].
    pub fn new(xs: impl Into<Vec<f64>>, ys: impl Into<Vec<f64>>, legend: impl Into<String>) -> Self {
        Self {
            xs: xs.into(),
            ys: ys.into(),
            legend: legend.into(),
            style: Some(Style::LineAndMarker),
            trend_lines: Vec::new(),
        }
    }

    /// Set the style; `None` leaves the plot without one and fails validation.
    pub fn style(mut self, style: impl Into<Option<Style>>) -> Self {
        self.style = style.into();
        self
    }

    pub fn trend_line(mut self, trend_line: impl Into<Option<TrendLine>>) -> Self {
        self.trend_lines.push(trend_line.into());
        self
    }

    pub fn trend_lines<I, T>(mut self, trend_lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<TrendLine>>,
    {
        self.trend_lines
            .extend(trend_lines.into_iter().map(Into::into));
        self
    }

    /// Check lengths, then the style. Nothing is recorded when this fails.
    pub fn validate(self) -> Result<PointsRequest> {
        if self.xs.len() != self.ys.len() {
            return Err(PlotError::invalid_argument(format!(
                "x and y arrays must have the same length ({} != {})",
                self.xs.len(),
                self.ys.len()
            )));
        }
        let style = self.style.ok_or(PlotError::NullArgument("style"))?;
        Ok(PointsRequest {
            xs: self.xs,
            ys: self.ys,
            legend: self.legend,
            style,
            trend_lines: self.trend_lines,
        })
    }
}

/// Validated request to plot a point set.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsRequest {
    xs: Vec<f64>,
    ys: Vec<f64>,
    legend: String,
    style: Style,
    trend_lines: Vec<Option<TrendLine>>,
}

impl PointsRequest {
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn trend_lines(&self) -> &[Option<TrendLine>] {
        &self.trend_lines
    }

    /// Paired coordinates in input order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(self.ys.iter()).map(|(&x, &y)| [x, y])
    }
}
