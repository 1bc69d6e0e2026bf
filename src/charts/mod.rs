//! Charts module - Sampling, styling and chart rendering

pub mod formatter;
mod plotter;
mod renderer;
pub mod sampler;
mod style;

pub use formatter::{format_tick, parse_tick};
pub use plotter::{AxisLabels, ChartPlotter, PALETTE};
pub use renderer::{ChartRenderer, RenderedSeries, SeriesRenderer};
pub use sampler::{sample, Samples};
pub use style::{appearance, Appearance, MarkerSize, SeriesKind};
