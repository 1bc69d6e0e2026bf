//! funcplot - Function and point-set plotting in a desktop window
//!
//! Register functions and point arrays on a [`Chart`], then [`Chart::display`]
//! them. Plots added before a window exists are buffered and replayed once the
//! chart widget is attached.

pub mod chart;
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;

pub use chart::Chart;
pub use charts::{ChartRenderer, RenderedSeries, SeriesRenderer};
pub use config::ChartConfig;
pub use data::{
    fallible, Function, FunctionPlot, PlotModel, PointsPlot, Style, TrendLine,
};
pub use error::{EvalError, PlotError, Result};
pub use gui::{ChartApp, ChartViewer};
